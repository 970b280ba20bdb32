//! OutlineAssembler - 主组装管道
//!
//! 每个音素依次尝试：笔画表 → 元音表 → 双元音表 → RAW 回退。
//! 行位在扫描结束后由第一个元音标记一次性确定。

use crate::outline::positioning::{lexical_position, PositionedToken};
use crate::phoneme::Phoneme;
use crate::strokes::{StrokeRuleTable, StrokeToken};
use crate::vowels::{
    derive_line_position, DiphthongSign, LinePosition, VowelMarker, VowelPlacementClassifier,
};

/// Outline 元素
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutlineElement {
    /// 辅音笔画
    Stroke(StrokeToken),
    /// 元音标记
    Vowel(VowelMarker),
    /// 双元音符号
    Diphthong(DiphthongSign),
    /// 无法识别的音素（非致命）
    Raw(Phoneme),
    /// 速记缩写的符号形式
    Shortform(String),
}

impl OutlineElement {
    /// 元素标识
    ///
    /// 笔画 → 笔画 id；元音 → `V_<音素>`；回退 → `RAW_<音素>`；缩写 → `SF_<符号>`
    pub fn token_id(&self) -> String {
        match self {
            OutlineElement::Stroke(stroke) => stroke.id.clone(),
            OutlineElement::Vowel(marker) => marker.id(),
            OutlineElement::Diphthong(sign) => sign.id(),
            OutlineElement::Raw(phoneme) => format!("RAW_{}", phoneme),
            OutlineElement::Shortform(symbolic) => format!("SF_{}", symbolic),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, OutlineElement::Raw(_))
    }
}

/// 一个词的完整 outline
///
/// 行位属于整个 outline，不属于单个元素。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Outline {
    pub elements: Vec<OutlineElement>,
    pub line_position: LinePosition,
}

impl Outline {
    /// 空 outline（行位 `On`）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 速记缩写 outline
    pub fn shortform(symbolic: &str) -> Self {
        Self {
            elements: vec![OutlineElement::Shortform(symbolic.to_string())],
            line_position: LinePosition::On,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// 全部元素标识（按顺序）
    pub fn token_ids(&self) -> Vec<String> {
        self.elements.iter().map(OutlineElement::token_id).collect()
    }

    /// 元音标记（按出现顺序）
    pub fn vowel_markers(&self) -> Vec<&VowelMarker> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                OutlineElement::Vowel(marker) => Some(marker),
                _ => None,
            })
            .collect()
    }

    /// 无法识别的音素
    pub fn raw_phonemes(&self) -> Vec<&Phoneme> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                OutlineElement::Raw(phoneme) => Some(phoneme),
                _ => None,
            })
            .collect()
    }

    pub fn has_raw(&self) -> bool {
        self.elements.iter().any(OutlineElement::is_raw)
    }
}

/// Outline 组装器
///
/// 只借用只读表，本身不保存任何状态，可随意创建。
#[derive(Debug, Clone, Copy)]
pub struct OutlineAssembler<'a> {
    strokes: &'a StrokeRuleTable,
    vowels: &'a VowelPlacementClassifier,
}

impl<'a> OutlineAssembler<'a> {
    /// 创建组装器
    pub fn new(strokes: &'a StrokeRuleTable, vowels: &'a VowelPlacementClassifier) -> Self {
        Self { strokes, vowels }
    }

    /// 组装 outline
    ///
    /// 输入必须已经规范化；组装器不会再次去除重音数字。
    pub fn assemble(&self, phonemes: &[Phoneme]) -> Outline {
        let mut elements = Vec::with_capacity(phonemes.len());
        let mut markers = Vec::new();

        for phoneme in phonemes {
            self.push_elements(phoneme, &mut elements, &mut markers);
        }

        Outline {
            elements,
            line_position: derive_line_position(&markers),
        }
    }

    /// 按词内位置标注的组装
    ///
    /// 第 i 个音素解析出的每个元素都带上 i 在整个序列中的位置。
    pub fn assemble_positioned(&self, phonemes: &[Phoneme]) -> Vec<PositionedToken> {
        let total = phonemes.len();
        let mut positioned = Vec::new();

        for (index, phoneme) in phonemes.iter().enumerate() {
            let position = lexical_position(index, total);
            let mut elements = Vec::new();
            let mut markers = Vec::new();
            self.push_elements(phoneme, &mut elements, &mut markers);

            positioned.extend(elements.into_iter().map(|element| PositionedToken {
                index,
                position,
                element,
            }));
        }

        positioned
    }

    /// 解析单个音素并追加元素
    fn push_elements(
        &self,
        phoneme: &Phoneme,
        elements: &mut Vec<OutlineElement>,
        markers: &mut Vec<VowelMarker>,
    ) {
        // 空音素：无操作
        if phoneme.is_empty() {
            return;
        }

        if let Some(strokes) = self.strokes.lookup(phoneme) {
            elements.extend(strokes.iter().cloned().map(OutlineElement::Stroke));
        } else if let Some(marker) = self.vowels.classify(phoneme) {
            markers.push(marker.clone());
            elements.push(OutlineElement::Vowel(marker));
        } else if let Some(sign) = self.vowels.classify_diphthong(phoneme) {
            elements.push(OutlineElement::Diphthong(sign));
        } else {
            tracing::trace!("未识别的音素: {}", phoneme);
            elements.push(OutlineElement::Raw(phoneme.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::normalize_all;
    use crate::strokes::{builtin_units, BUILTIN_MAX_UNIT};

    fn tables() -> (StrokeRuleTable, VowelPlacementClassifier) {
        let strokes = StrokeRuleTable::builder()
            .register_all(builtin_units(BUILTIN_MAX_UNIT))
            .unwrap()
            .build()
            .unwrap();
        (strokes, VowelPlacementClassifier::standard().unwrap())
    }

    #[test]
    fn test_pay() {
        let (strokes, vowels) = tables();
        let assembler = OutlineAssembler::new(&strokes, &vowels);
        let outline = assembler.assemble(&normalize_all(&["P", "EY"]));

        assert_eq!(outline.token_ids(), vec!["U1_P_light", "V_EY"]);
        assert_eq!(outline.line_position, LinePosition::Above);
    }

    #[test]
    fn test_empty_input() {
        let (strokes, vowels) = tables();
        let outline = OutlineAssembler::new(&strokes, &vowels).assemble(&[]);
        assert!(outline.is_empty());
        assert_eq!(outline.line_position, LinePosition::On);
    }

    #[test]
    fn test_consonants_only_on_line() {
        let (strokes, vowels) = tables();
        let outline = OutlineAssembler::new(&strokes, &vowels).assemble(&normalize_all(&["K", "T"]));
        assert_eq!(outline.len(), 2);
        assert_eq!(outline.line_position, LinePosition::On);
    }

    #[test]
    fn test_unknown_becomes_raw() {
        let (strokes, vowels) = tables();
        let outline = OutlineAssembler::new(&strokes, &vowels).assemble(&normalize_all(&["r"]));
        assert_eq!(outline.token_ids(), vec!["RAW_R"]);
        assert!(outline.has_raw());
        assert_eq!(outline.raw_phonemes()[0].as_str(), "R");
    }

    #[test]
    fn test_empty_phoneme_is_noop() {
        let (strokes, vowels) = tables();
        let outline =
            OutlineAssembler::new(&strokes, &vowels).assemble(&normalize_all(&["", "T", " "]));
        assert_eq!(outline.token_ids(), vec!["U1_T_light"]);
    }

    #[test]
    fn test_later_vowel_never_overrides() {
        let (strokes, vowels) = tables();
        let assembler = OutlineAssembler::new(&strokes, &vowels);
        let cat = assembler.assemble(&normalize_all(&["K", "AE", "T"]));
        let cata = assembler.assemble(&normalize_all(&["K", "AE", "T", "AH"]));
        assert_eq!(cat.line_position, cata.line_position);
        assert_eq!(cat.line_position, LinePosition::Above);
        assert_eq!(cata.vowel_markers().len(), 2);
    }

    #[test]
    fn test_diphthong_does_not_set_position() {
        let (strokes, vowels) = tables();
        let outline =
            OutlineAssembler::new(&strokes, &vowels).assemble(&normalize_all(&["T", "AY", "M"]));
        assert_eq!(outline.token_ids(), vec!["U1_T_light", "V_AY", "U3_M_short"]);
        assert_eq!(outline.line_position, LinePosition::On);
    }

    #[test]
    fn test_positioned_chair() {
        let (strokes, vowels) = tables();
        let tokens = OutlineAssembler::new(&strokes, &vowels)
            .assemble_positioned(&normalize_all(&["CH", "EH1", "R"]));
        let ids: Vec<String> = tokens.iter().map(PositionedToken::token_id).collect();
        assert_eq!(
            ids,
            vec!["POS_INITIAL|U1_CH_light", "POS_MEDIAL|V_EH", "POS_FINAL|RAW_R"]
        );
    }

    #[test]
    fn test_shortform_outline() {
        let outline = Outline::shortform("k-m");
        assert_eq!(outline.token_ids(), vec!["SF_k-m"]);
        assert_eq!(outline.line_position, LinePosition::On);
    }
}
