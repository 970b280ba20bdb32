//! 速记缩写表
//!
//! 分为 common / advanced 两层，仅用于教学分组；查询时合并为一个命名空间。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 缩写分层
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 最常用词
    Common,
    /// 高速书写用的进阶缩写
    Advanced,
}

impl Tier {
    /// 该层的内置条目
    pub fn builtin(&self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            Tier::Common => COMMON_SHORTFORMS,
            Tier::Advanced => ADVANCED_SHORTFORMS,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Common => f.write_str("common"),
            Tier::Advanced => f.write_str("advanced"),
        }
    }
}

/// 缩写条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortformEntry {
    /// 小写单词
    pub word: String,
    /// 符号形式（非完整笔画序列）
    pub symbolic: String,
    /// 用法说明
    pub usage: String,
    pub tier: Tier,
}

impl ShortformEntry {
    /// 创建新的缩写条目（单词统一为小写）
    pub fn new(word: &str, symbolic: &str, usage: &str, tier: Tier) -> Self {
        Self {
            word: word.trim().to_lowercase(),
            symbolic: symbolic.to_string(),
            usage: usage.to_string(),
            tier,
        }
    }
}

/// Common 层：(单词, 符号, 用法)
pub const COMMON_SHORTFORMS: &[(&str, &str, &str)] = &[
    ("a", ")", "article, very common in phrases"),
    ("an", ")", "article, before vowel sounds"),
    ("the", "...", "most common word, often tick at end of phrases"),
    ("and", "d", "conjunction, frequently phrased"),
    ("be", "b", "verb, foundation for becoming, been"),
    ("is", "s", "verb, often joined to other words"),
    ("his", "s", "possessive, same as \"is\" but context differs"),
    ("of", "v", "preposition, very common in phrases"),
    ("to", "t", "preposition/infinitive, heavily phrased"),
    ("do", "d", "verb, simple downstroke"),
    ("you", "u", "pronoun, basis for \"your\""),
    ("are", "r", "verb, simple upstroke"),
    ("all", "l", "determiner, simple upstroke"),
    ("come", "k-m", "verb, K stroke + M stroke"),
    ("been", "b-n", "past participle of \"be\""),
    ("which", "wh", "relative pronoun"),
    ("should", "sh-d", "modal verb"),
    ("could", "k-d", "modal verb"),
    ("would", "w-d", "modal verb"),
    ("think", "th-k", "verb, thinking"),
    ("about", "b-t", "preposition, very common"),
    ("because", "b-k", "conjunction, reason"),
];

/// Advanced 层
pub const ADVANCED_SHORTFORMS: &[(&str, &str, &str)] = &[
    ("characteristic", "ch-r", "noun/adjective, abbreviated"),
    ("demonstration", "d-m", "noun, showing/proving"),
    ("difficulty", "d-f", "noun, problem/challenge"),
    ("electricity", "e-l", "noun, power/energy"),
    ("intelligent", "i-t", "adjective, smart/clever"),
    ("nevertheless", "n-v", "adverb, however/still"),
    ("opportunity", "o-p", "noun, chance/possibility"),
    ("particularly", "p-r", "adverb, especially"),
    ("responsibility", "r-s", "noun, duty/obligation"),
    ("understanding", "u-d", "noun/adjective, comprehension"),
];
