//! VowelPlacementClassifier - 元音位置分类器
//!
//! 三个位置各有四个槽位：长点、短点、长划、短划。表是封闭的：
//! 一个音素只占一个槽位，一个槽位最多一个音素。

use std::collections::HashMap;

use crate::error::{PitmanError, PitmanResult};
use crate::phoneme::Phoneme;
use crate::vowels::marker::{
    DiphthongSign, LinePosition, Place, VowelLength, VowelMarker, VowelSymbol,
};

/// 元音表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelEntry {
    pub phoneme: &'static str,
    pub place: Place,
    pub symbol: VowelSymbol,
    pub length: VowelLength,
    /// 发音说明
    pub sound: &'static str,
    /// 例词
    pub examples: &'static [&'static str],
}

/// 双元音表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiphthongEntry {
    pub phoneme: &'static str,
    pub place: Place,
    pub sound: &'static str,
}

const fn vowel(
    phoneme: &'static str,
    place: Place,
    symbol: VowelSymbol,
    length: VowelLength,
    sound: &'static str,
    examples: &'static [&'static str],
) -> VowelEntry {
    VowelEntry {
        phoneme,
        place,
        symbol,
        length,
        sound,
        examples,
    }
}

use Place::{First, Second, Third};
use VowelLength::{Long, Short};
use VowelSymbol::{Dash, Dot};

/// 标准元音表
pub const STANDARD_VOWELS: &[VowelEntry] = &[
    // First place - 线上方
    vowel("AA", First, Dot, Long, "ah as in father", &["pa", "calm", "palm", "father"]),
    vowel("AE", First, Dot, Short, "a as in cat", &["cat", "fact", "add", "bank"]),
    vowel("EY", First, Dash, Long, "a as in day", &["day", "may", "take", "make"]),
    vowel("EH", First, Dash, Short, "e as in pen", &["pen", "get", "let", "bed"]),
    // Second place - 线上
    vowel("AO", Second, Dot, Long, "aw as in all", &["all", "law", "saw", "call"]),
    vowel("ER", Second, Dot, Short, "er as in her", &["her", "bird", "term"]),
    vowel("UW", Second, Dash, Long, "oo as in too", &["too", "food", "moon"]),
    vowel("UH", Second, Dash, Short, "oo as in book", &["book", "put", "good"]),
    // Third place - 穿过线
    vowel("IY", Third, Dot, Long, "ee as in see", &["see", "each", "team", "leave"]),
    vowel("IH", Third, Dot, Short, "i as in big", &["if", "big", "ship", "bill"]),
    vowel("OW", Third, Dash, Long, "o as in go", &["go", "so", "home", "note"]),
    vowel("AH", Third, Dash, Short, "u as in but", &["but", "cut", "much", "run"]),
];

/// 标准双元音表
pub const STANDARD_DIPHTHONGS: &[DiphthongEntry] = &[
    DiphthongEntry { phoneme: "AY", place: First, sound: "i as in my" },
    DiphthongEntry { phoneme: "OY", place: First, sound: "oi as in boy" },
    DiphthongEntry { phoneme: "AW", place: Third, sound: "ow as in now" },
];

/// 元音位置分类器（构建后只读）
#[derive(Debug, Clone)]
pub struct VowelPlacementClassifier {
    vowels: HashMap<Phoneme, VowelMarker>,
    diphthongs: HashMap<Phoneme, DiphthongSign>,
    entries: Vec<VowelEntry>,
}

impl VowelPlacementClassifier {
    /// 使用标准表创建
    pub fn standard() -> PitmanResult<Self> {
        Self::from_tables(STANDARD_VOWELS, STANDARD_DIPHTHONGS)
    }

    /// 从元音表和双元音表创建
    ///
    /// 重复音素或重复槽位都是构建错误。
    pub fn from_tables(vowels: &[VowelEntry], diphthongs: &[DiphthongEntry]) -> PitmanResult<Self> {
        let mut markers: HashMap<Phoneme, VowelMarker> = HashMap::new();
        let mut slots: HashMap<(Place, VowelSymbol, VowelLength), Phoneme> = HashMap::new();

        for entry in vowels {
            let phoneme = Phoneme::from(entry.phoneme);
            if markers.contains_key(&phoneme) {
                return Err(PitmanError::DuplicateVowel {
                    phoneme: phoneme.to_string(),
                });
            }

            let slot = (entry.place, entry.symbol, entry.length);
            if let Some(existing) = slots.get(&slot) {
                return Err(PitmanError::VowelSlotConflict {
                    place: entry.place.to_string(),
                    symbol: entry.symbol.to_string(),
                    length: entry.length.to_string(),
                    existing: existing.to_string(),
                    phoneme: phoneme.to_string(),
                });
            }

            slots.insert(slot, phoneme.clone());
            markers.insert(
                phoneme.clone(),
                VowelMarker {
                    phoneme,
                    place: entry.place,
                    symbol: entry.symbol,
                    length: entry.length,
                },
            );
        }

        let mut signs: HashMap<Phoneme, DiphthongSign> = HashMap::new();
        for entry in diphthongs {
            let phoneme = Phoneme::from(entry.phoneme);
            if markers.contains_key(&phoneme) || signs.contains_key(&phoneme) {
                return Err(PitmanError::DuplicateVowel {
                    phoneme: phoneme.to_string(),
                });
            }
            signs.insert(
                phoneme.clone(),
                DiphthongSign {
                    phoneme,
                    place: entry.place,
                },
            );
        }

        tracing::debug!("元音表构建完成: {} 个元音, {} 个双元音", markers.len(), signs.len());

        Ok(Self {
            vowels: markers,
            diphthongs: signs,
            entries: vowels.to_vec(),
        })
    }

    /// 分类元音音素
    pub fn classify(&self, phoneme: &Phoneme) -> Option<VowelMarker> {
        self.vowels.get(phoneme).cloned()
    }

    /// 查询双元音
    pub fn classify_diphthong(&self, phoneme: &Phoneme) -> Option<DiphthongSign> {
        self.diphthongs.get(phoneme).cloned()
    }

    /// 某个位置的全部元音（按表顺序）
    pub fn vowels_in_place(&self, place: Place) -> Vec<&VowelEntry> {
        self.entries.iter().filter(|e| e.place == place).collect()
    }

    /// 通过例词查找元音条目（大小写不敏感）
    pub fn find_by_example(&self, word: &str) -> Option<&VowelEntry> {
        let word = word.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.examples.iter().any(|ex| *ex == word))
    }

    /// 由元音标记序列推导行位
    pub fn derive_line_position(markers: &[VowelMarker]) -> LinePosition {
        derive_line_position(markers)
    }
}

/// 由元音标记序列推导行位
///
/// 只看第一个元音标记，后面的元音不会覆盖；没有元音时为 `On`。
pub fn derive_line_position(markers: &[VowelMarker]) -> LinePosition {
    markers
        .first()
        .map(|marker| LinePosition::from(marker.place))
        .unwrap_or_default()
}
