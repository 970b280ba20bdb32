//! ShortformResolver - 整词缩写查询
//!
//! 精确匹配、大小写不敏感。命中时直接返回缩写 outline，不再调用组装器。

use std::collections::HashMap;

use crate::error::{PitmanError, PitmanResult};
use crate::outline::Outline;
use crate::shortforms::table::{ShortformEntry, Tier};

/// 缩写解析器（构建后只读）
#[derive(Debug, Clone, Default)]
pub struct ShortformResolver {
    /// 小写单词 → 条目
    entries: HashMap<String, ShortformEntry>,
}

impl ShortformResolver {
    /// 空解析器（所有词都走组装器）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 加载指定分层的内置缩写
    ///
    /// Common 层总是先于 Advanced 层注册，与传入顺序无关。
    pub fn with_tiers(tiers: &[Tier]) -> PitmanResult<Self> {
        let mut ordered = tiers.to_vec();
        ordered.sort();
        ordered.dedup();

        let entries = ordered.iter().flat_map(|tier| {
            tier.builtin()
                .iter()
                .map(move |&(word, symbolic, usage)| ShortformEntry::new(word, symbolic, usage, *tier))
        });

        Self::from_entries(entries)
    }

    /// 从条目列表构建
    ///
    /// 同一单词出现两次即为构建错误，不会出现后者静默覆盖前者。
    pub fn from_entries<I>(entries: I) -> PitmanResult<Self>
    where
        I: IntoIterator<Item = ShortformEntry>,
    {
        let mut map: HashMap<String, ShortformEntry> = HashMap::new();

        for entry in entries {
            if let Some(existing) = map.get(&entry.word) {
                return Err(PitmanError::DuplicateShortform {
                    word: entry.word.clone(),
                    tier: entry.tier.to_string(),
                    existing_tier: existing.tier.to_string(),
                });
            }
            map.insert(entry.word.clone(), entry);
        }

        tracing::debug!("缩写表构建完成: {} 条", map.len());
        Ok(Self { entries: map })
    }

    /// 查询缩写 outline
    pub fn resolve(&self, word: &str) -> Option<Outline> {
        self.explain(word).map(|entry| Outline::shortform(&entry.symbolic))
    }

    /// 查询缩写条目（含用法说明）
    pub fn explain(&self, word: &str) -> Option<&ShortformEntry> {
        self.entries.get(&word.trim().to_lowercase())
    }

    /// 某一层的全部条目（按单词排序）
    pub fn entries(&self, tier: Tier) -> Vec<&ShortformEntry> {
        let mut list: Vec<&ShortformEntry> =
            self.entries.values().filter(|e| e.tier == tier).collect();
        list.sort_by(|a, b| a.word.cmp(&b.word));
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
