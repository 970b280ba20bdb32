//! StenoEngine - 主引擎
//!
//! 在启动时一次性构建笔画表、元音表和缩写表，之后只读，
//! 可在任意多个线程间共享而无需加锁。

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::{PitmanError, PitmanResult};
use crate::outline::{Outline, OutlineAssembler, PositionedToken};
use crate::phoneme::{normalize_all, Phoneme};
use crate::phrasing::{Phrase, PhraseJoinSuggestion, PhraseJoiner};
use crate::shortforms::{ShortformResolver, Tier};
use crate::strokes::{builtin_units, StrokeRuleTable};
use crate::vowels::VowelPlacementClassifier;

/// Outline 的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// 命中缩写表
    Shortform(Tier),
    /// 由组装器计算
    Assembled,
}

/// 已解析的单词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWord {
    pub word: String,
    /// 规范化后的音素
    pub phonemes: Vec<Phoneme>,
    pub outline: Outline,
    pub resolution: Resolution,
}

/// 规则快照
#[derive(Debug)]
struct RuleSet {
    strokes: StrokeRuleTable,
    vowels: VowelPlacementClassifier,
    shortforms: ShortformResolver,
}

/// 速记引擎
#[derive(Debug, Clone)]
pub struct StenoEngine {
    rules: Arc<RuleSet>,
}

impl StenoEngine {
    /// 按配置构建引擎
    ///
    /// 任何一张表构建失败，整个引擎都不会被创建。
    pub fn new(config: &EngineConfig) -> PitmanResult<Self> {
        let strokes = StrokeRuleTable::builder()
            .register_all(builtin_units(config.max_unit))?
            .register_all(config.sorted_extra_units())?
            .build()?;

        let vowels = VowelPlacementClassifier::standard()?;
        check_vowel_shadowing(&strokes, &vowels)?;

        let shortforms = if config.shortforms.enabled {
            ShortformResolver::with_tiers(&config.shortforms.tiers)?
        } else {
            ShortformResolver::empty()
        };

        tracing::info!(
            "规则快照构建完成: 单元 {:?}, {} 个笔画, {} 个缩写",
            strokes.units(),
            strokes.len(),
            shortforms.len()
        );

        Ok(Self {
            rules: Arc::new(RuleSet {
                strokes,
                vowels,
                shortforms,
            }),
        })
    }

    /// 使用内置表构建
    pub fn default_tables() -> PitmanResult<Self> {
        Self::new(&EngineConfig::default())
    }

    /// 组装器
    pub fn assembler(&self) -> OutlineAssembler<'_> {
        OutlineAssembler::new(&self.rules.strokes, &self.rules.vowels)
    }

    /// 组装已规范化的音素序列
    pub fn assemble(&self, phonemes: &[Phoneme]) -> Outline {
        self.assembler().assemble(phonemes)
    }

    /// 先规范化再组装
    pub fn assemble_raw<S: AsRef<str>>(&self, tokens: &[S]) -> Outline {
        self.assemble(&normalize_all(tokens))
    }

    /// 按词内位置标注的组装
    pub fn assemble_positioned(&self, phonemes: &[Phoneme]) -> Vec<PositionedToken> {
        self.assembler().assemble_positioned(phonemes)
    }

    /// 解析单词
    ///
    /// 缩写优先；未命中时用音素组装。
    pub fn resolve_word<S: AsRef<str>>(&self, word: &str, raw_phonemes: &[S]) -> ResolvedWord {
        let phonemes = normalize_all(raw_phonemes);

        if let Some(entry) = self.rules.shortforms.explain(word) {
            tracing::trace!("缩写命中: {} → {}", word, entry.symbolic);
            return ResolvedWord {
                word: word.to_string(),
                phonemes,
                outline: Outline::shortform(&entry.symbolic),
                resolution: Resolution::Shortform(entry.tier),
            };
        }

        let outline = self.assemble(&phonemes);
        tracing::trace!("组装: {} → {:?}", word, outline.token_ids());
        ResolvedWord {
            word: word.to_string(),
            phonemes,
            outline,
            resolution: Resolution::Assembled,
        }
    }

    /// 相邻词连写建议
    pub fn suggest_joins<S: AsRef<str>>(&self, words: &[S]) -> Vec<PhraseJoinSuggestion> {
        PhraseJoiner::suggest_joins(words)
    }

    /// 组成带连写信息的短语
    pub fn phrase(&self, members: Vec<ResolvedWord>) -> Phrase {
        PhraseJoiner::annotate(members)
    }

    pub fn stroke_table(&self) -> &StrokeRuleTable {
        &self.rules.strokes
    }

    pub fn vowel_classifier(&self) -> &VowelPlacementClassifier {
        &self.rules.vowels
    }

    pub fn shortform_resolver(&self) -> &ShortformResolver {
        &self.rules.shortforms
    }
}

/// 笔画键不得与元音或双元音重名
///
/// 组装时笔画优先，重名会让对应元音永远无法被选中。
fn check_vowel_shadowing(
    strokes: &StrokeRuleTable,
    vowels: &VowelPlacementClassifier,
) -> PitmanResult<()> {
    for token in strokes.iter() {
        if vowels.classify(&token.phoneme).is_some()
            || vowels.classify_diphthong(&token.phoneme).is_some()
        {
            return Err(PitmanError::StrokeShadowsVowel {
                phoneme: token.phoneme.to_string(),
                unit: token.unit,
            });
        }
    }
    Ok(())
}
