//! Player intent parsing.
//!
//! Turns a free-text gear complaint ("던전 클리어가 너무 어려워, 현재 무기
//! 등급 3인데 공격력이 부족해") into a structured [`PlayerState`]: per-slot
//! grade estimates, known stats, dungeon difficulty, and the set of reported
//! problem categories. Parsing never fails — missing signal always resolves
//! to the documented defaults (grade unknown, medium difficulty, general
//! problem).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::SlotType;
use crate::stats::{self, StatBlock};

/// Reported dungeon difficulty, ordered from easiest to hardest.
///
/// Synonym sets are scanned in declaration order; the first level with a
/// matching keyword wins, so "매우어려움" resolves to `Hard` (it contains
/// "어려움") before `Extreme` is ever checked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &["쉬움", "easy", "간단", "쉽게"],
            Difficulty::Medium => &["보통", "medium", "적당", "중간"],
            Difficulty::Hard => &["어려움", "hard", "어려워", "힘들어", "어려운"],
            Difficulty::Extreme => &["극한", "extreme", "매우어려움", "극도로어려움"],
        }
    }
}

/// Gameplay problem category reported by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Damage,
    Survival,
    Mana,
    Speed,
    Accuracy,
    General,
}

impl Problem {
    pub const ALL: [Problem; 6] = [
        Problem::Damage,
        Problem::Survival,
        Problem::Mana,
        Problem::Speed,
        Problem::Accuracy,
        Problem::General,
    ];

    /// Categories detectable from text. `General` is only ever a fallback.
    pub const DETECTABLE: [Problem; 5] = [
        Problem::Damage,
        Problem::Survival,
        Problem::Mana,
        Problem::Speed,
        Problem::Accuracy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Problem::Damage => "damage",
            Problem::Survival => "survival",
            Problem::Mana => "mana",
            Problem::Speed => "speed",
            Problem::Accuracy => "accuracy",
            Problem::General => "general",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Problem::Damage => &["데미지", "딜링", "공격력", "damage", "dps"],
            Problem::Survival => &["생존", "죽어", "버티기", "survival", "tank"],
            Problem::Mana => &["마나", "마나부족", "마나고갈", "mana"],
            Problem::Speed => &["속도", "느려", "빠르게", "speed"],
            Problem::Accuracy => &["정확도", "빗나가", "miss", "accuracy"],
            Problem::General => &[],
        }
    }
}

/// Structured snapshot of a player's situation, built once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Best-known grade per slot. `None` means the text never mentioned one.
    pub weapon_grade: Option<u32>,
    pub armor_grade: Option<u32>,
    pub accessory_grade: Option<u32>,
    /// Aggregate stats mentioned anywhere in the text.
    pub stats: StatBlock,
    pub difficulty: Difficulty,
    /// Detected problem categories in declaration order, never empty.
    pub problems: Vec<Problem>,
}

impl PlayerState {
    /// Known grade for a slot. Special items carry no grade keyword, so the
    /// engine's default grade always applies to them.
    pub fn grade_for(&self, slot: SlotType) -> Option<u32> {
        match slot {
            SlotType::Weapon => self.weapon_grade,
            SlotType::Armor => self.armor_grade,
            SlotType::Accessory => self.accessory_grade,
            SlotType::Special => None,
        }
    }
}

/// Grade pattern families per slot: slot nouns followed by a grade/tier
/// keyword and an integer. Weapon gets a second family of named item nouns.
static GRADE_PATTERNS: LazyLock<Vec<(SlotType, Vec<Regex>)>> = LazyLock::new(|| {
    let families: [(SlotType, &[&str]); 3] = [
        (
            SlotType::Weapon,
            &["무기|weapon", "검|지팡이|단검|석궁|창|마법봉|마력구"],
        ),
        (SlotType::Armor, &["갑옷|armor|로브|가죽갑옷|경갑"]),
        (
            SlotType::Accessory,
            &["목걸이|반지|팔찌|귀걸이|necklace|ring|bracelet|earring"],
        ),
    ];
    families
        .into_iter()
        .map(|(slot, nouns)| {
            let patterns = nouns
                .iter()
                .map(|n| {
                    let p = format!(r"(?i)(?:{n}).*?(?:등급|grade|티어|tier).*?(\d+)");
                    Regex::new(&p).expect("grade keyword pattern is valid")
                })
                .collect();
            (slot, patterns)
        })
        .collect()
});

/// Parse free text into a [`PlayerState`]. Pure, never fails.
pub fn parse(text: &str) -> PlayerState {
    let lower = text.to_lowercase();
    PlayerState {
        weapon_grade: slot_grade(text, SlotType::Weapon),
        armor_grade: slot_grade(text, SlotType::Armor),
        accessory_grade: slot_grade(text, SlotType::Accessory),
        stats: stats::extract(text),
        difficulty: detect_difficulty(&lower),
        problems: detect_problems(&lower),
    }
}

/// Maximum grade mentioned for a slot across all of its pattern families.
///
/// Users often list several items of the same slot; the highest stated grade
/// is assumed the most reliable estimate of their current tier.
fn slot_grade(text: &str, slot: SlotType) -> Option<u32> {
    let patterns = GRADE_PATTERNS
        .iter()
        .find(|(s, _)| *s == slot)
        .map(|(_, p)| p.as_slice())
        .unwrap_or(&[]);

    patterns
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
}

fn detect_difficulty(lower: &str) -> Difficulty {
    Difficulty::ALL
        .into_iter()
        .find(|level| level.keywords().iter().any(|k| lower.contains(k)))
        .unwrap_or_default()
}

fn detect_problems(lower: &str) -> Vec<Problem> {
    let detected: Vec<Problem> = Problem::DETECTABLE
        .into_iter()
        .filter(|problem| problem.keywords().iter().any(|k| lower.contains(k)))
        .collect();
    if detected.is_empty() {
        vec![Problem::General]
    } else {
        detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    #[test]
    fn test_no_signal_resolves_to_defaults() {
        let state = parse("안녕하세요");
        assert_eq!(state.weapon_grade, None);
        assert_eq!(state.armor_grade, None);
        assert_eq!(state.accessory_grade, None);
        assert!(state.stats.is_empty());
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.problems, vec![Problem::General]);
    }

    #[test]
    fn test_dungeon_complaint_scenario() {
        let state = parse("던전 클리어가 너무 어려워, 현재 무기 등급 3인데 공격력이 부족해");
        assert_eq!(state.weapon_grade, Some(3));
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.problems, vec![Problem::Damage]);
    }

    #[test]
    fn test_max_grade_wins_on_multiple_mentions() {
        let state = parse("무기 등급 3 쓰다가 무기 등급 5 새로 샀어");
        assert_eq!(state.weapon_grade, Some(5));
    }

    #[test]
    fn test_named_weapon_noun_counts_for_weapon_grade() {
        let state = parse("지팡이 등급 4를 쓰고 있어");
        assert_eq!(state.weapon_grade, Some(4));
    }

    #[test]
    fn test_armor_and_accessory_grades() {
        let state = parse("갑옷 등급 4인데 목걸이 티어 2가 문제야");
        assert_eq!(state.armor_grade, Some(4));
        assert_eq!(state.accessory_grade, Some(2));
    }

    #[test]
    fn test_english_grade_keywords() {
        let state = parse("my weapon grade 5 feels weak");
        assert_eq!(state.weapon_grade, Some(5));
    }

    #[test]
    fn test_stats_aggregated_from_text() {
        let state = parse("공격력 120에 방어력 45야");
        assert_eq!(state.stats.get(Stat::Attack), 120);
        assert_eq!(state.stats.get(Stat::Defense), 45);
    }

    #[test]
    fn test_multiple_problems_all_detected() {
        let state = parse("딜링도 부족하고 자꾸 죽어");
        assert_eq!(state.problems, vec![Problem::Damage, Problem::Survival]);
    }

    #[test]
    fn test_problem_detection_order_is_declaration_order() {
        // Mention accuracy first in the text; detection order stays fixed
        let state = parse("빗나가기도 하고 마나도 부족해");
        assert_eq!(state.problems, vec![Problem::Mana, Problem::Accuracy]);
    }

    #[test]
    fn test_difficulty_priority_order() {
        // "매우어려움" contains the Hard keyword "어려움", and Hard is
        // checked before Extreme
        assert_eq!(detect_difficulty("매우어려움"), Difficulty::Hard);
        assert_eq!(detect_difficulty("극한 난이도"), Difficulty::Extreme);
        assert_eq!(detect_difficulty("간단했어"), Difficulty::Easy);
    }

    #[test]
    fn test_mana_problem_keyword() {
        let state = parse("마나가 부족해서 스킬을 못써");
        assert!(state.problems.contains(&Problem::Mana));
    }

    #[test]
    fn test_parse_never_panics_on_odd_input() {
        for text in ["", "   ", "💀💀💀", "grade grade grade", "등급"] {
            let state = parse(text);
            assert!(!state.problems.is_empty());
        }
    }
}
