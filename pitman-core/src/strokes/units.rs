//! 内置单元笔画表（Units 1-3）
//!
//! 笔画标识沿用确定性规则引擎的命名：`U<单元>_<辅音>_<特征>`。

use crate::strokes::token::{Direction, StrokeRule, UnitTable, Weight};

/// 内置的最高单元编号
pub const BUILTIN_MAX_UNIT: u8 = 3;

type RuleRow = (&'static str, &'static str, Weight, Direction, Option<&'static str>);

/// Unit 1 - 直线笔画
const UNIT_1: &[RuleRow] = &[
    ("P", "U1_P_light", Weight::Light, Direction::Down, Some("B")),
    ("B", "U1_B_heavy", Weight::Heavy, Direction::Down, Some("P")),
    ("T", "U1_T_light", Weight::Light, Direction::Up, Some("D")),
    ("D", "U1_D_heavy", Weight::Heavy, Direction::Up, Some("T")),
    ("CH", "U1_CH_light", Weight::Light, Direction::Slant, Some("JH")),
    ("JH", "U1_J_heavy", Weight::Heavy, Direction::Slant, Some("CH")),
];

/// Unit 2 - 曲线笔画（擦音）
///
/// S 与 SH 的浊音对（Z / ZH）不在内置单元中，因此不声明配对。
const UNIT_2: &[RuleRow] = &[
    ("F", "U2_F_light", Weight::Light, Direction::Curve, Some("V")),
    ("V", "U2_V_heavy", Weight::Heavy, Direction::Curve, Some("F")),
    ("TH", "U2_TH_light", Weight::Light, Direction::Curve, Some("DH")),
    ("DH", "U2_DH_heavy", Weight::Heavy, Direction::Curve, Some("TH")),
    ("S", "U2_S_circle", Weight::Light, Direction::Circle, None),
    ("SH", "U2_SH_curve", Weight::Light, Direction::Curve, None),
];

/// Unit 3 - 水平笔画与鼻音
const UNIT_3: &[RuleRow] = &[
    ("K", "U3_K_light", Weight::Light, Direction::Horizontal, Some("G")),
    ("G", "U3_G_heavy", Weight::Heavy, Direction::Horizontal, Some("K")),
    ("M", "U3_M_short", Weight::Heavy, Direction::Horizontal, Some("N")),
    ("N", "U3_N_short", Weight::Light, Direction::Horizontal, Some("M")),
    ("NG", "U3_NG_connect", Weight::Heavy, Direction::Horizontal, None),
    ("L", "U3_L_light", Weight::Light, Direction::Up, None),
];

const UNIT_TITLES: &[&str] = &[
    "Straight Strokes",
    "Curved Strokes",
    "Horizontal Strokes and Nasals",
];

fn unit_table(unit: u8, rows: &[RuleRow]) -> UnitTable {
    let title = UNIT_TITLES
        .get(usize::from(unit).saturating_sub(1))
        .copied()
        .unwrap_or_default();

    let strokes = rows
        .iter()
        .map(|&(phoneme, id, weight, direction, pairs_with)| {
            StrokeRule::new(phoneme, id, weight, direction, pairs_with)
        })
        .collect();

    UnitTable::new(unit, title, strokes)
}

/// 内置单元表（1..=max_unit，按顺序）
///
/// `max_unit` 超出内置范围时截断到 [`BUILTIN_MAX_UNIT`]。
pub fn builtin_units(max_unit: u8) -> Vec<UnitTable> {
    [UNIT_1, UNIT_2, UNIT_3]
        .iter()
        .zip(1u8..)
        .take_while(|(_, unit)| *unit <= max_unit)
        .map(|(rows, unit)| unit_table(unit, rows))
        .collect()
}
