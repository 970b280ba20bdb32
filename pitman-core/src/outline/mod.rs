//! Outline 组装模块
//!
//! 音素序列 → 笔画 / 元音标记 / RAW 回退，附带整词行位；
//! 另有按词内位置（initial/medial/final）标注的辅助模式。

pub mod assembler;
pub mod positioning;

// 导出核心类型
pub use assembler::{Outline, OutlineAssembler, OutlineElement};
pub use positioning::{lexical_position, position_tags, LexicalPosition, PositionedToken};
