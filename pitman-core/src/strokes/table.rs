//! StrokeRuleTable - 单元笔画注册表
//!
//! 单元表按顺序注册，后注册的单元只能新增音素，不能重定义已有音素。
//! 冲突在构建阶段报错，查询阶段永不失败。

use std::collections::HashMap;

use crate::error::{PitmanError, PitmanResult};
use crate::phoneme::Phoneme;
use crate::strokes::token::{StrokeToken, UnitTable};

/// 只读笔画表
#[derive(Debug, Clone, Default)]
pub struct StrokeRuleTable {
    /// 音素 → 笔画
    rules: HashMap<Phoneme, Vec<StrokeToken>>,
    /// 注册顺序
    order: Vec<Phoneme>,
    /// 已注册的单元编号（按注册顺序）
    units: Vec<u8>,
}

impl StrokeRuleTable {
    /// 创建构建器
    pub fn builder() -> StrokeRuleTableBuilder {
        StrokeRuleTableBuilder::default()
    }

    /// 查询音素对应的笔画
    pub fn lookup(&self, phoneme: &Phoneme) -> Option<&[StrokeToken]> {
        self.rules.get(phoneme).map(|tokens| tokens.as_slice())
    }

    /// 是否包含该音素
    pub fn contains(&self, phoneme: &Phoneme) -> bool {
        self.rules.contains_key(phoneme)
    }

    /// 已注册音素数量
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 已注册的单元编号
    pub fn units(&self) -> &[u8] {
        &self.units
    }

    /// 指定单元引入的笔画（按注册顺序）
    pub fn strokes_for_unit(&self, unit: u8) -> Vec<&StrokeToken> {
        self.iter().filter(|token| token.unit == unit).collect()
    }

    /// 按注册顺序遍历所有笔画
    pub fn iter(&self) -> impl Iterator<Item = &StrokeToken> + '_ {
        self.order
            .iter()
            .filter_map(move |p| self.rules.get(p))
            .flat_map(|tokens| tokens.iter())
    }
}

/// 笔画表构建器
///
/// `register` 消耗构建器自身：一旦出错，半成品随之丢弃。
#[derive(Debug, Default)]
pub struct StrokeRuleTableBuilder {
    table: StrokeRuleTable,
}

impl StrokeRuleTableBuilder {
    /// 注册一个单元表
    pub fn register(mut self, unit_table: UnitTable) -> PitmanResult<Self> {
        let unit = unit_table.unit;
        if unit == 0 {
            return Err(PitmanError::InvalidUnit {
                unit,
                reason: "unit numbers start at 1".to_string(),
            });
        }

        for rule in &unit_table.strokes {
            if rule.phoneme.is_empty() {
                return Err(PitmanError::InvalidUnit {
                    unit,
                    reason: format!("stroke '{}' has an empty phoneme", rule.id),
                });
            }
            if rule.id.trim().is_empty() {
                return Err(PitmanError::InvalidUnit {
                    unit,
                    reason: format!("phoneme '{}' has an empty stroke id", rule.phoneme),
                });
            }

            if let Some(existing) = self.table.rules.get(&rule.phoneme) {
                let existing_unit = existing.first().map(|t| t.unit).unwrap_or(unit);
                return Err(PitmanError::DuplicateRuleRegistration {
                    phoneme: rule.phoneme.to_string(),
                    unit,
                    existing_unit,
                });
            }

            tracing::debug!("注册笔画: unit={} {} → {}", unit, rule.phoneme, rule.id);
            self.table
                .rules
                .insert(rule.phoneme.clone(), vec![rule.to_token(unit)]);
            self.table.order.push(rule.phoneme.clone());
        }

        if !self.table.units.contains(&unit) {
            self.table.units.push(unit);
        }

        Ok(self)
    }

    /// 依次注册多个单元表
    pub fn register_all<I>(self, units: I) -> PitmanResult<Self>
    where
        I: IntoIterator<Item = UnitTable>,
    {
        units.into_iter().try_fold(self, |builder, unit| builder.register(unit))
    }

    /// 完成构建
    ///
    /// 校验清浊配对：配对笔画必须互相指向、方向相同、粗细不同。
    pub fn build(self) -> PitmanResult<StrokeRuleTable> {
        for token in self.table.iter() {
            let Some(counterpart) = &token.pairs_with else {
                continue;
            };

            let pair_error = |reason: &str| PitmanError::InvalidStrokePair {
                phoneme: token.phoneme.to_string(),
                counterpart: counterpart.to_string(),
                reason: reason.to_string(),
            };

            let other = self
                .table
                .lookup(counterpart)
                .and_then(|tokens| tokens.first())
                .ok_or_else(|| pair_error("counterpart is not registered"))?;

            if other.pairs_with.as_ref() != Some(&token.phoneme) {
                return Err(pair_error("pair relation is not symmetric"));
            }
            if other.direction != token.direction {
                return Err(pair_error("paired strokes must share a direction"));
            }
            if other.weight == token.weight {
                return Err(pair_error("paired strokes must differ in weight"));
            }
        }

        tracing::debug!(
            "笔画表构建完成: {} 个音素, 单元 {:?}",
            self.table.len(),
            self.table.units
        );
        Ok(self.table)
    }
}
