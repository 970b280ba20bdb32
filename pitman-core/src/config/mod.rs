//! Pitman 引擎配置模块
//!
//! 统一的配置管理，从 ~/.config/pitman/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PitmanError, PitmanResult};
use crate::shortforms::Tier;
use crate::strokes::{UnitTable, BUILTIN_MAX_UNIT};

/// 缩写配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortformConfig {
    /// 是否启用缩写替换
    pub enabled: bool,
    /// 启用的分层
    pub tiers: Vec<Tier>,
}

impl Default for ShortformConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tiers: vec![Tier::Common, Tier::Advanced],
        }
    }
}

/// 引擎完整配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 注册的最高内置单元
    pub max_unit: u8,
    /// 缩写配置
    pub shortforms: ShortformConfig,
    /// 用户自定义单元（在内置单元之后按单元编号注册）
    pub extra_units: Vec<UnitTable>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_unit: BUILTIN_MAX_UNIT,
            shortforms: ShortformConfig::default(),
            extra_units: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// 加载默认位置的配置文件
    ///
    /// 文件不存在时使用默认配置。
    pub fn load() -> PitmanResult<Self> {
        let Some(config_path) = Self::default_path() else {
            tracing::warn!("无法获取配置目录，使用默认配置");
            return Ok(Self::default());
        };

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 加载指定路径的配置文件
    pub fn load_from(path: &Path) -> PitmanResult<Self> {
        if !path.exists() {
            return Err(PitmanError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| PitmanError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::parse(&content, &path.display().to_string())?;

        tracing::info!("📋 加载配置成功: {:?}", path);
        tracing::info!(
            "📊 单元配置: max_unit={}, extra_units={}, shortforms={}",
            config.max_unit,
            config.extra_units.len(),
            config.shortforms.enabled
        );
        Ok(config)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> PitmanResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// 保存配置文件
    pub fn save_to(&self, path: &Path) -> PitmanResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| PitmanError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pitman").join("config.toml"))
    }

    /// 按单元编号排序的自定义单元
    pub fn sorted_extra_units(&self) -> Vec<UnitTable> {
        let mut units = self.extra_units.clone();
        units.sort_by_key(|u| u.unit);
        units
    }

    fn parse(content: &str, path: &str) -> PitmanResult<Self> {
        toml::from_str(content).map_err(|e| PitmanError::ConfigParse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strokes::{Direction, Weight};
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_unit, BUILTIN_MAX_UNIT);
        assert!(config.shortforms.enabled);
        assert_eq!(config.shortforms.tiers, vec![Tier::Common, Tier::Advanced]);
        assert!(config.extra_units.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("max_unit = 1").unwrap();
        assert_eq!(config.max_unit, 1);
        assert!(config.shortforms.enabled);
    }

    #[test]
    fn test_parse_extra_units() {
        let content = r#"
max_unit = 2

[shortforms]
enabled = false
tiers = ["common"]

[[extra_units]]
unit = 5
title = "Liquids"

[[extra_units.strokes]]
phoneme = "R"
id = "U5_R_up"
weight = "light"
direction = "up"

[[extra_units]]
unit = 4

[[extra_units.strokes]]
phoneme = "Z"
id = "U4_Z_heavy"
weight = "heavy"
direction = "circle"
        "#;

        let config = EngineConfig::from_toml_str(content).unwrap();
        assert_eq!(config.max_unit, 2);
        assert!(!config.shortforms.enabled);
        assert_eq!(config.shortforms.tiers, vec![Tier::Common]);

        let units = config.sorted_extra_units();
        assert_eq!(units[0].unit, 4);
        assert_eq!(units[1].unit, 5);
        assert_eq!(units[1].strokes[0].direction, Direction::Up);
        assert_eq!(units[0].strokes[0].weight, Weight::Heavy);
    }

    #[test]
    fn test_invalid_toml() {
        let result = EngineConfig::from_toml_str("max_unit = \"three\"");
        assert!(matches!(result, Err(PitmanError::ConfigParse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = EngineConfig::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(PitmanError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_unreadable_path() {
        // 目录存在但无法作为文件读取
        let dir = TempDir::new().unwrap();
        let result = EngineConfig::load_from(dir.path());
        assert!(matches!(result, Err(PitmanError::ConfigParse { .. })));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = EngineConfig::default();
        config.max_unit = 2;
        config.shortforms.tiers = vec![Tier::Advanced];
        config.save_to(&path).unwrap();

        let loaded = EngineConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
