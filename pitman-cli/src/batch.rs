//! 批量生成：词表 → JSONL outline 记录

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use pitman_core::{normalize, StenoEngine};

use crate::dict::{letter_tokens, PronunciationDict};

/// 记录来源标记
pub const RULE_ENGINE_SOURCE: &str = "rule_engine";

/// 批处理错误
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Word list not found: {0}")]
    MissingWordlistSource(PathBuf),
}

/// 一行输出记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub word: String,
    /// 词典中的发音；词典中没有该词时为空
    pub phonemes: Vec<String>,
    pub outline_tokens: Vec<String>,
    pub source: String,
}

/// 读取词表：去除首尾空白，跳过空行
pub fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(BatchError::MissingWordlistSource(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// 生成单个词的记录
pub fn build_record(engine: &StenoEngine, dict: &PronunciationDict, word: &str) -> BatchRecord {
    let phonemes: Vec<String> = dict.lookup(word).map(<[String]>::to_vec).unwrap_or_default();

    let mut outline_tokens = if phonemes.is_empty() {
        tracing::debug!("词典中没有 {:?}，使用字母回退", word);
        fallback_outline_tokens(engine, word)
    } else {
        engine.resolve_word(word, &phonemes).outline.token_ids()
    };

    // 每个词至少输出一个 token
    if outline_tokens.is_empty() {
        outline_tokens.push(raw_word_token(word));
    }

    BatchRecord {
        word: word.to_string(),
        phonemes,
        outline_tokens,
        source: RULE_ENGINE_SOURCE.to_string(),
    }
}

/// 字母回退的 outline token
///
/// 单个数字在规范化时会被当作重音标记去掉，因此直接输出 `RAW_<字符>`。
/// 没有任何可用字符时输出整词的 `RAW_<WORD>`。
pub fn fallback_outline_tokens(engine: &StenoEngine, word: &str) -> Vec<String> {
    if let Some(outline) = engine.shortform_resolver().resolve(word) {
        return outline.token_ids();
    }

    let tokens: Vec<String> = letter_tokens(word)
        .into_iter()
        .flat_map(|letter| {
            let phoneme = normalize(&letter);
            if phoneme.is_empty() {
                vec![format!("RAW_{}", letter)]
            } else {
                engine.assemble(&[phoneme]).token_ids()
            }
        })
        .collect();

    if tokens.is_empty() {
        vec![raw_word_token(word)]
    } else {
        tokens
    }
}

fn raw_word_token(word: &str) -> String {
    format!("RAW_{}", word.trim().to_uppercase())
}

/// 并行生成全部记录（输出顺序与词表一致）
pub fn build_records(
    engine: &StenoEngine,
    dict: &PronunciationDict,
    words: &[String],
) -> Vec<BatchRecord> {
    words
        .par_iter()
        .map(|word| build_record(engine, dict, word))
        .collect()
}

/// 写出 JSONL
pub fn write_jsonl(path: &Path, records: &[BatchRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record).context("failed to serialize record")?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// 完整批处理流程，返回写出的记录数
pub fn run_batch(
    engine: &StenoEngine,
    dict: &PronunciationDict,
    wordlist: &Path,
    out: &Path,
) -> Result<usize> {
    let words = read_wordlist(wordlist)?;
    tracing::info!("读取词表: {} 个词", words.len());

    let records = build_records(engine, dict, &words);
    let raw_count = records
        .iter()
        .filter(|r| r.outline_tokens.iter().any(|t| t.starts_with("RAW_")))
        .count();

    write_jsonl(out, &records)?;
    tracing::info!(
        "写出 {} 条记录到 {} ({} 条含未识别音素)",
        records.len(),
        out.display(),
        raw_count
    );
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitman_core::EngineConfig;
    use tempfile::TempDir;

    fn rule_engine() -> StenoEngine {
        let mut config = EngineConfig::default();
        config.shortforms.enabled = false;
        StenoEngine::new(&config).unwrap()
    }

    fn dict() -> PronunciationDict {
        PronunciationDict::parse("CHAIR  CH EH1 R\nPAY  P EY1\nTHE  DH AH0\n").unwrap()
    }

    #[test]
    fn test_record_from_dictionary() {
        let record = build_record(&rule_engine(), &dict(), "chair");
        assert_eq!(record.phonemes, vec!["CH", "EH1", "R"]);
        assert_eq!(record.outline_tokens, vec!["U1_CH_light", "V_EH", "RAW_R"]);
        assert_eq!(record.source, "rule_engine");
    }

    #[test]
    fn test_letter_fallback() {
        let record = build_record(&rule_engine(), &dict(), "tk");
        assert!(record.phonemes.is_empty());
        assert_eq!(record.outline_tokens, vec!["U1_T_light", "U3_K_light"]);
    }

    #[test]
    fn test_numeric_word_fallback() {
        let record = build_record(&rule_engine(), &PronunciationDict::default(), "42");
        assert!(record.phonemes.is_empty());
        assert_eq!(record.outline_tokens, vec!["RAW_4", "RAW_2"]);
    }

    #[test]
    fn test_mixed_word_keeps_digits() {
        let record = build_record(&rule_engine(), &PronunciationDict::default(), "b2b");
        assert_eq!(record.outline_tokens, vec!["U1_B_heavy", "RAW_2", "U1_B_heavy"]);
    }

    #[test]
    fn test_symbol_only_word_emits_raw_word() {
        let record = build_record(&rule_engine(), &PronunciationDict::default(), "--");
        assert_eq!(record.outline_tokens, vec!["RAW_--"]);
    }

    #[test]
    fn test_fallback_still_uses_shortforms() {
        let engine = StenoEngine::default_tables().unwrap();
        assert_eq!(fallback_outline_tokens(&engine, "Because"), vec!["SF_b-k"]);
    }

    #[test]
    fn test_shortform_engine() {
        let engine = StenoEngine::default_tables().unwrap();
        let record = build_record(&engine, &dict(), "the");
        assert_eq!(record.outline_tokens, vec!["SF_..."]);
        assert_eq!(record.phonemes, vec!["DH", "AH0"]);
    }

    #[test]
    fn test_missing_wordlist() {
        let dir = TempDir::new().unwrap();
        let err = read_wordlist(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BatchError>(),
            Some(BatchError::MissingWordlistSource(_))
        ));
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let dir = TempDir::new().unwrap();
        let wordlist = dir.path().join("words.txt");
        let out = dir.path().join("out").join("outlines.jsonl");
        std::fs::write(&wordlist, "pay\n\n  chair  \nthe\n").unwrap();

        let count = run_batch(&rule_engine(), &dict(), &wordlist, &out).unwrap();
        assert_eq!(count, 3);

        let content = std::fs::read_to_string(&out).unwrap();
        let records: Vec<BatchRecord> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["pay", "chair", "the"]);
        assert_eq!(records[0].outline_tokens, vec!["U1_P_light", "V_EY"]);
    }

    #[test]
    fn test_jsonl_field_names() {
        let record = build_record(&rule_engine(), &dict(), "pay");
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        for key in ["word", "phonemes", "outline_tokens", "source"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
