//! 词内位置标注（initial / medial / final）
//!
//! 用于生成训练数据。与整词行位（LinePosition）是两个独立概念。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outline::assembler::OutlineElement;

/// 元素在词内的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexicalPosition {
    Initial,
    Medial,
    Final,
}

impl LexicalPosition {
    /// 位置标记（例如 "POS_INITIAL"）
    pub fn tag(&self) -> &'static str {
        match self {
            LexicalPosition::Initial => "POS_INITIAL",
            LexicalPosition::Medial => "POS_MEDIAL",
            LexicalPosition::Final => "POS_FINAL",
        }
    }
}

impl fmt::Display for LexicalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 计算第 `index` 个元素在长度为 `total` 的序列中的位置
pub fn lexical_position(index: usize, total: usize) -> LexicalPosition {
    if total <= 1 || index == 0 {
        LexicalPosition::Initial
    } else if index == total - 1 {
        LexicalPosition::Final
    } else {
        LexicalPosition::Medial
    }
}

/// 长度为 `total` 的序列的全部位置
pub fn position_tags(total: usize) -> Vec<LexicalPosition> {
    (0..total).map(|i| lexical_position(i, total)).collect()
}

/// 带词内位置的 outline 元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    /// 来源音素的下标
    pub index: usize,
    pub position: LexicalPosition,
    pub element: OutlineElement,
}

impl PositionedToken {
    /// `<位置标记>|<元素标识>`
    pub fn token_id(&self) -> String {
        format!("{}|{}", self.position.tag(), self.element.token_id())
    }
}
