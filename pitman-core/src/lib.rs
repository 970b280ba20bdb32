//! Pitman Core Engine
//!
//! 基于规则表的音素 → 速记笔画转写引擎（Pitman New Era / NCS）

#![warn(rust_2018_idioms)]

pub mod config;
pub mod engine;
pub mod error;
pub mod outline;
pub mod phoneme;
pub mod phrasing;
pub mod shortforms;
pub mod strokes;
pub mod vowels;

// Re-export key types
pub use config::{EngineConfig, ShortformConfig};
pub use engine::{Resolution, ResolvedWord, StenoEngine};
pub use error::{PitmanError, PitmanResult};
pub use outline::{LexicalPosition, Outline, OutlineElement, PositionedToken};
pub use phoneme::{normalize, Phoneme};
pub use vowels::LinePosition;

/// 初始化日志系统
///
/// 调试模式 (--features debug-logs): 由 PITMAN_LOG 控制级别，默认 warn
/// 生产模式: 静默运行
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    init_logging_with_default("warn");
}

/// 初始化日志系统，PITMAN_LOG 未设置时使用 `default_level`
///
/// 日志写到 stderr，不会混入 stdout 上的输出。
pub fn init_logging_with_default(default_level: &str) {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("PITMAN_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式: 静默运行，不启用日志
        // 如需日志，请使用 --features debug-logs 编译
        let _ = default_level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging_with_default("debug");
        tracing::debug!("日志初始化完成");
    }
}
