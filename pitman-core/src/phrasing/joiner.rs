//! PhraseJoiner - 连写建议
//!
//! 单遍扫描、窗口为 2：只看 `(w[i], w[i+1])`，不回溯，不做最长匹配。
//! 三词以上的短语由调用方重复应用得到。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::ResolvedWord;

/// 冠词
const ARTICLES: &[&str] = &["a", "an", "the"];

/// 介词
const PREPOSITIONS: &[&str] = &["to", "of", "in", "on", "at", "by"];

/// 情态助动词
const MODAL_AUXILIARIES: &[&str] = &["should", "could", "would"];

/// 连写类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    /// 冠词 + 名词
    ArticleNoun,
    /// 介词 + 后续词
    Preposition,
    /// 助动词 + 主动词
    AuxiliaryVerb,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::ArticleNoun => "article_noun",
            JoinType::Preposition => "preposition",
            JoinType::AuxiliaryVerb => "auxiliary_verb",
        }
    }

    /// 固定说明文字
    pub fn rationale(&self) -> &'static str {
        match self {
            JoinType::ArticleNoun => "Natural joining, maintain clear meaning",
            JoinType::Preposition => "Smooth connection, very common pattern",
            JoinType::AuxiliaryVerb => "Helper verb + main verb, natural flow",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一条连写建议
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseJoinSuggestion {
    /// 第一个词在输入中的下标
    pub index: usize,
    pub first: String,
    pub second: String,
    pub join_type: JoinType,
    pub rationale: &'static str,
}

impl PhraseJoinSuggestion {
    /// 短语文本（例如 "the time"）
    pub fn phrase(&self) -> String {
        format!("{} {}", self.first, self.second)
    }
}

/// 已解析 outline 组成的短语
///
/// 只在成员之间附加边界信息，不修改成员 outline 本身。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub members: Vec<ResolvedWord>,
    pub joins: Vec<PhraseJoinSuggestion>,
}

impl Phrase {
    /// 成员 `index` 与 `index + 1` 之间的连写
    pub fn join_after(&self, index: usize) -> Option<&PhraseJoinSuggestion> {
        self.joins.iter().find(|j| j.index == index)
    }
}

/// 连写判定器（无状态）
pub struct PhraseJoiner;

impl PhraseJoiner {
    /// 判断词类（大小写不敏感）
    pub fn classify(word: &str) -> Option<JoinType> {
        let word = word.trim().to_lowercase();
        let word = word.as_str();

        if ARTICLES.contains(&word) {
            Some(JoinType::ArticleNoun)
        } else if PREPOSITIONS.contains(&word) {
            Some(JoinType::Preposition)
        } else if MODAL_AUXILIARIES.contains(&word) {
            Some(JoinType::AuxiliaryVerb)
        } else {
            None
        }
    }

    /// 扫描相邻词对，生成连写建议
    pub fn suggest_joins<S: AsRef<str>>(words: &[S]) -> Vec<PhraseJoinSuggestion> {
        words
            .windows(2)
            .enumerate()
            .filter_map(|(index, pair)| {
                let first = pair[0].as_ref();
                let second = pair[1].as_ref();
                Self::classify(first).map(|join_type| PhraseJoinSuggestion {
                    index,
                    first: first.trim().to_lowercase(),
                    second: second.trim().to_lowercase(),
                    join_type,
                    rationale: join_type.rationale(),
                })
            })
            .collect()
    }

    /// 为已解析的词序列附加连写信息
    pub fn annotate(members: Vec<ResolvedWord>) -> Phrase {
        let words: Vec<&str> = members.iter().map(|m| m.word.as_str()).collect();
        let joins = Self::suggest_joins(&words);

        Phrase { members, joins }
    }
}
