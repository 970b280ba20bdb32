//! 笔画类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::phoneme::Phoneme;

/// 笔画粗细（清音 light / 浊音 heavy）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Light,
    Heavy,
}

/// 笔画方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    Horizontal,
    Slant,
    Curve,
    Circle,
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Light => f.write_str("light"),
            Weight::Heavy => f.write_str("heavy"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Horizontal => "horizontal",
            Direction::Slant => "slant",
            Direction::Curve => "curve",
            Direction::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// 已解析的笔画
///
/// 从表中按值复制给调用方，不持有对表的引用。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrokeToken {
    /// 笔画标识（例如 "U1_P_light"）
    pub id: String,
    /// 引入该笔画的单元
    pub unit: u8,
    /// 对应的辅音音素
    pub phoneme: Phoneme,
    pub weight: Weight,
    pub direction: Direction,
    /// 清浊配对音素
    pub pairs_with: Option<Phoneme>,
}

/// 单条笔画规则（配置形式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeRule {
    pub phoneme: Phoneme,
    pub id: String,
    pub weight: Weight,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs_with: Option<Phoneme>,
}

impl StrokeRule {
    /// 创建新的笔画规则
    pub fn new(
        phoneme: &str,
        id: &str,
        weight: Weight,
        direction: Direction,
        pairs_with: Option<&str>,
    ) -> Self {
        Self {
            phoneme: Phoneme::from(phoneme),
            id: id.to_string(),
            weight,
            direction,
            pairs_with: pairs_with.map(Phoneme::from),
        }
    }

    /// 转换为指定单元的笔画
    pub fn to_token(&self, unit: u8) -> StrokeToken {
        StrokeToken {
            id: self.id.clone(),
            unit,
            phoneme: self.phoneme.clone(),
            weight: self.weight,
            direction: self.direction,
            pairs_with: self.pairs_with.clone(),
        }
    }
}

/// 一个教学单元的笔画表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTable {
    /// 单元编号（从 1 开始）
    pub unit: u8,
    /// 单元标题
    #[serde(default)]
    pub title: String,
    /// 单元内的笔画规则
    #[serde(default)]
    pub strokes: Vec<StrokeRule>,
}

impl UnitTable {
    /// 创建新的单元表
    pub fn new(unit: u8, title: &str, strokes: Vec<StrokeRule>) -> Self {
        Self {
            unit,
            title: title.to_string(),
            strokes,
        }
    }
}
