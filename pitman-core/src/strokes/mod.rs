//! 笔画规则模块
//!
//! 按教学单元（unit）组织的辅音 → 笔画映射表。单元表在启动时按顺序注册，
//! 构建完成后只读。

pub mod table;
pub mod token;
pub mod units;

// 导出核心类型
pub use table::{StrokeRuleTable, StrokeRuleTableBuilder};
pub use token::{Direction, StrokeRule, StrokeToken, UnitTable, Weight};
pub use units::{builtin_units, BUILTIN_MAX_UNIT};
