//! 元音位置模块
//!
//! 元音 → (位置, 符号, 长短) 分类，以及由首个元音决定的整词行位（position writing）。

pub mod classifier;
pub mod marker;

// 导出核心类型
pub use classifier::{
    derive_line_position, DiphthongEntry, VowelEntry, VowelPlacementClassifier,
    STANDARD_DIPHTHONGS, STANDARD_VOWELS,
};
pub use marker::{DiphthongSign, LinePosition, Place, VowelLength, VowelMarker, VowelSymbol};
