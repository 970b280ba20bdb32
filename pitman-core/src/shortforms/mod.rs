//! 速记缩写模块
//!
//! Shortforms - 高频词的整词缩写，优先于计算出的 outline

pub mod resolver;
pub mod table;

// 导出核心类型
pub use resolver::ShortformResolver;
pub use table::{ShortformEntry, Tier, ADVANCED_SHORTFORMS, COMMON_SHORTFORMS};
