//! CMUdict 格式的发音词典
//!
//! 每行 `WORD  PH1 PH2 ...`；`;;;` 开头为注释；`WORD(1)` 等备选发音被忽略，
//! 只保留第一条发音。查询大小写不敏感。

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// 词条行：单词、可选的备选编号、音素
const ENTRY_PATTERN: &str = r"^(?P<word>[^\s(]+)(?P<alt>\(\d+\))?\s+(?P<phonemes>\S.*)$";

/// 发音词典
#[derive(Debug, Clone, Default)]
pub struct PronunciationDict {
    /// 小写单词 → 原始音素
    entries: HashMap<String, Vec<String>>,
}

impl PronunciationDict {
    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?;
        let dict = Self::parse(&content)?;
        tracing::info!("加载词典: {} 个词条 ({})", dict.len(), path.display());
        Ok(dict)
    }

    /// 解析词典文本
    pub fn parse(content: &str) -> Result<Self> {
        let pattern = Regex::new(ENTRY_PATTERN).context("invalid dictionary pattern")?;
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let Some(caps) = pattern.captures(line) else {
                tracing::debug!("跳过无法解析的词典行 {}: {:?}", line_no + 1, line);
                continue;
            };
            if caps.name("alt").is_some() {
                continue;
            }

            let word = caps["word"].to_lowercase();
            let phonemes = caps["phonemes"]
                .split_whitespace()
                .map(str::to_string)
                .collect();
            entries.entry(word).or_insert(phonemes);
        }

        Ok(Self { entries })
    }

    /// 查询发音
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries
            .get(&word.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 无发音时的回退：单词中的字母和数字逐个大写，其余字符丢弃
pub fn letter_tokens(word: &str) -> Vec<String> {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = ";;; # CMUdict sample
CHAIR  CH EH1 R
CAT  K AE1 T
TOMATO  T AH0 M EY1 T OW2
TOMATO(1)  T AH0 M AA1 T OW2

PAY  P EY1
";

    #[test]
    fn test_parse_entries() {
        let dict = PronunciationDict::parse(SAMPLE).unwrap();
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.lookup("chair").unwrap(), ["CH", "EH1", "R"]);
    }

    #[test]
    fn test_alternate_ignored() {
        let dict = PronunciationDict::parse(SAMPLE).unwrap();
        assert_eq!(dict.lookup("tomato").unwrap()[3], "EY1");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let dict = PronunciationDict::parse(SAMPLE).unwrap();
        assert_eq!(dict.lookup("Cat"), dict.lookup("CAT"));
        assert!(dict.lookup("dog").is_none());
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let dict = PronunciationDict::parse(";;; only a comment\n\n").unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmudict.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let dict = PronunciationDict::load(&path).unwrap();
        assert_eq!(dict.lookup("pay").unwrap(), ["P", "EY1"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(PronunciationDict::load(&dir.path().join("none.txt")).is_err());
    }

    #[test]
    fn test_letter_tokens() {
        assert_eq!(letter_tokens("Xyz"), vec!["X", "Y", "Z"]);
        assert_eq!(letter_tokens("b2b"), vec!["B", "2", "B"]);
        assert_eq!(letter_tokens("don't"), vec!["D", "O", "N", "T"]);
        assert!(letter_tokens("  ").is_empty());
    }
}
