//! PhonemeNormalizer - 音素规范化
//!
//! 外部词典给出的音素可能带重音数字（"AH0"）或大小写不一致（"ah"），
//! 进入笔画表之前统一为规范形式。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 规范音素（大写、无重音数字）
///
/// 只能通过 [`normalize`] 或 `From<&str>` 构造，保证内容始终是规范形式。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Phoneme(String);

impl Phoneme {
    /// 规范形式的字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空音素（下游视为无操作）
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phoneme {
    fn from(token: &str) -> Self {
        normalize(token)
    }
}

impl From<String> for Phoneme {
    fn from(token: String) -> Self {
        normalize(&token)
    }
}

impl From<Phoneme> for String {
    fn from(phoneme: Phoneme) -> Self {
        phoneme.0
    }
}

impl AsRef<str> for Phoneme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 规范化单个音素标记
///
/// 规则：
/// - 去除首尾空白
/// - 转为大写
/// - 去除末尾的一个 ASCII 数字（重音标记）
///
/// 从不失败；空输入得到空音素。
pub fn normalize(token: &str) -> Phoneme {
    let mut canonical = token.trim().to_ascii_uppercase();

    if canonical.ends_with(|c: char| c.is_ascii_digit()) {
        canonical.pop();
    }

    Phoneme(canonical)
}

/// 规范化整个音素序列（保持顺序）
pub fn normalize_all<S: AsRef<str>>(tokens: &[S]) -> Vec<Phoneme> {
    tokens.iter().map(|t| normalize(t.as_ref())).collect()
}
