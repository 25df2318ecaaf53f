//! Human-readable recommendation reports.
//!
//! Renders the parsed situation and the recommendation set as the Korean
//! report the upstream boundary (web handler, CLI) shows to players. Pure
//! string assembly, fully deterministic for a given input.

use std::fmt::Write;

use crate::engine::RecommendationSet;
use crate::intent::PlayerState;

fn grade_label(grade: Option<u32>) -> String {
    match grade {
        Some(g) => g.to_string(),
        None => "미지정".to_string(),
    }
}

/// Render the full report: header, current-situation block, one block per
/// recommendation, fixed closing tips.
pub fn format(intent: &PlayerState, set: &RecommendationSet) -> String {
    let mut out = String::new();

    out.push_str("🎯 **맞춤형 장비 최적화 추천**\n\n");

    out.push_str("**현재 상황 분석**:\n");
    let problems = intent
        .problems
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "- 문제점: {problems}");
    let _ = writeln!(out, "- 난이도: {}", intent.difficulty.as_str());
    let _ = writeln!(
        out,
        "- 현재 장비 등급: 무기 {}, 방어구 {}, 장신구 {}\n",
        grade_label(intent.weapon_grade),
        grade_label(intent.armor_grade),
        grade_label(intent.accessory_grade)
    );

    out.push_str("**동일 등급 내 최적화 추천**:\n\n");
    for (index, rec) in set.recommendations.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. **{}** ({})",
            index + 1,
            rec.item.name,
            rec.item.rarity.as_str()
        );
        let _ = writeln!(out, "   - 효과: {}", rec.item.stat_text);
        let _ = writeln!(out, "   - 비용: {} 골드", rec.item.cost);
        let _ = writeln!(out, "   - 개선 효과: {}점 향상", rec.improvement);
        let _ = writeln!(out, "   - 추천 이유: {}\n", rec.rationale);
    }

    out.push_str("💡 **핵심 포인트**:\n");
    out.push_str("• 동일 등급 내에서도 스탯 조합에 따라 성능 차이가 큽니다.\n");
    out.push_str("• 현재 겪고 있는 문제점에 특화된 스탯을 우선시하세요.\n");
    out.push_str("• 비용 대비 효과가 가장 높은 아이템을 선택하세요.\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Item, Rarity, SlotType};
    use crate::engine::Recommendation;
    use crate::intent::{Difficulty, Problem};
    use crate::stats;

    fn sample_intent() -> PlayerState {
        PlayerState {
            weapon_grade: Some(3),
            armor_grade: None,
            accessory_grade: None,
            stats: stats::extract(""),
            difficulty: Difficulty::Hard,
            problems: vec![Problem::Damage],
        }
    }

    fn sample_set() -> RecommendationSet {
        let item = Item {
            id: 2,
            name: "암살자의 단검".into(),
            slot: SlotType::Weapon,
            stats: stats::extract("공격력+40, 이동속도+20%"),
            stat_text: "공격력+40, 이동속도+20%".into(),
            grade: 3,
            rarity: Rarity::from_grade(3),
            cost: 20_000,
        };
        RecommendationSet {
            total_cost: item.cost,
            total_improvement: 2.5,
            recommendations: vec![Recommendation {
                slot: SlotType::Weapon,
                item,
                improvement: 2.5,
                problem: Problem::Damage,
                rationale: "테스트 추천 이유".into(),
            }],
        }
    }

    #[test]
    fn test_report_contains_situation_block() {
        let report = format(&sample_intent(), &sample_set());
        assert!(report.contains("문제점: damage"));
        assert!(report.contains("난이도: hard"));
        assert!(report.contains("무기 3"));
        assert!(report.contains("방어구 미지정"));
    }

    #[test]
    fn test_report_lists_each_recommendation() {
        let report = format(&sample_intent(), &sample_set());
        assert!(report.contains("1. **암살자의 단검** (uncommon)"));
        assert!(report.contains("효과: 공격력+40, 이동속도+20%"));
        assert!(report.contains("비용: 20000 골드"));
        assert!(report.contains("개선 효과: 2.5점 향상"));
        assert!(report.contains("추천 이유: 테스트 추천 이유"));
    }

    #[test]
    fn test_report_has_header_and_closing_tips() {
        let report = format(&sample_intent(), &sample_set());
        assert!(report.starts_with("🎯"));
        assert!(report.contains("💡 **핵심 포인트**"));
        assert!(report.ends_with("선택하세요.\n"));
    }

    #[test]
    fn test_empty_set_still_renders_full_skeleton() {
        let report = format(&sample_intent(), &RecommendationSet::default());
        assert!(report.contains("**동일 등급 내 최적화 추천**"));
        assert!(report.contains("핵심 포인트"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let a = format(&sample_intent(), &sample_set());
        let b = format(&sample_intent(), &sample_set());
        assert_eq!(a, b);
    }
}
