//! 元音标记类型

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::phoneme::Phoneme;

/// 元音位置（first / second / third place）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    First,
    Second,
    Third,
}

/// 元音符号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelSymbol {
    Dot,
    Dash,
}

/// 元音长短（long → heavy 符号，short → light 符号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelLength {
    Short,
    Long,
}

/// 整个 outline 相对于书写线的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePosition {
    /// 线上方（first place）
    Above,
    /// 线上（second place，无元音时的默认值）
    #[default]
    On,
    /// 穿过线（third place）
    Through,
}

impl From<Place> for LinePosition {
    fn from(place: Place) -> Self {
        match place {
            Place::First => LinePosition::Above,
            Place::Second => LinePosition::On,
            Place::Third => LinePosition::Through,
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::First => f.write_str("first"),
            Place::Second => f.write_str("second"),
            Place::Third => f.write_str("third"),
        }
    }
}

impl fmt::Display for VowelSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VowelSymbol::Dot => f.write_str("dot"),
            VowelSymbol::Dash => f.write_str("dash"),
        }
    }
}

impl fmt::Display for VowelLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VowelLength::Short => f.write_str("short"),
            VowelLength::Long => f.write_str("long"),
        }
    }
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinePosition::Above => f.write_str("above"),
            LinePosition::On => f.write_str("on"),
            LinePosition::Through => f.write_str("through"),
        }
    }
}

/// 元音标记
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VowelMarker {
    pub phoneme: Phoneme,
    pub place: Place,
    pub symbol: VowelSymbol,
    pub length: VowelLength,
}

impl VowelMarker {
    /// 标记标识（例如 "V_EY"）
    pub fn id(&self) -> String {
        format!("V_{}", self.phoneme)
    }
}

/// 双元音符号
///
/// 没有点/划槽位，单独成为 outline 元素，不参与行位判定。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiphthongSign {
    pub phoneme: Phoneme,
    pub place: Place,
}

impl DiphthongSign {
    pub fn id(&self) -> String {
        format!("V_{}", self.phoneme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_to_line_position() {
        assert_eq!(LinePosition::from(Place::First), LinePosition::Above);
        assert_eq!(LinePosition::from(Place::Second), LinePosition::On);
        assert_eq!(LinePosition::from(Place::Third), LinePosition::Through);
    }

    #[test]
    fn test_default_line_position_is_on() {
        assert_eq!(LinePosition::default(), LinePosition::On);
    }

    #[test]
    fn test_marker_id() {
        let marker = VowelMarker {
            phoneme: Phoneme::from("EY1"),
            place: Place::First,
            symbol: VowelSymbol::Dash,
            length: VowelLength::Long,
        };
        assert_eq!(marker.id(), "V_EY");
    }
}
