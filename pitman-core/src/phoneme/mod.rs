//! 音素模块
//!
//! 规范化 ARPAbet 风格的音素标记（大写、去除重音数字）

pub mod normalizer;

pub use normalizer::{normalize, normalize_all, Phoneme};
