use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitmanError {
    // 笔画表错误（仅在构建阶段出现）
    #[error("Duplicate stroke rule for '{phoneme}' in unit {unit} (already registered by unit {existing_unit})")]
    DuplicateRuleRegistration {
        phoneme: String,
        unit: u8,
        existing_unit: u8,
    },

    #[error("Invalid stroke pair {phoneme} <-> {counterpart}: {reason}")]
    InvalidStrokePair {
        phoneme: String,
        counterpart: String,
        reason: String,
    },

    #[error("Invalid unit {unit}: {reason}")]
    InvalidUnit { unit: u8, reason: String },

    #[error("Stroke rule for '{phoneme}' in unit {unit} would shadow the vowel sign of the same phoneme")]
    StrokeShadowsVowel { phoneme: String, unit: u8 },

    // 元音表错误
    #[error("Duplicate vowel phoneme: {phoneme}")]
    DuplicateVowel { phoneme: String },

    #[error("Vowel slot {place}/{symbol}/{length} already taken by '{existing}', cannot add '{phoneme}'")]
    VowelSlotConflict {
        place: String,
        symbol: String,
        length: String,
        existing: String,
        phoneme: String,
    },

    // 速记缩写错误
    #[error("Duplicate shortform '{word}' in {tier} tier (already defined in {existing_tier} tier)")]
    DuplicateShortform {
        word: String,
        tier: String,
        existing_tier: String,
    },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PitmanResult<T> = Result<T, PitmanError>;
