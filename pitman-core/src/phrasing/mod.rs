//! 短语连写模块
//!
//! 相邻两词按固定词类（冠词、介词、情态助动词）判断是否适合连写

pub mod joiner;

// 导出核心类型
pub use joiner::{JoinType, Phrase, PhraseJoinSuggestion, PhraseJoiner};
