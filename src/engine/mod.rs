//! Recommendation engine - the orchestration pipeline.
//!
//! One `recommend` call runs a linear pipeline: parse intent → for each
//! reported problem pick its optimal slot types → fetch same-grade
//! candidates from the catalog → compare the two cheapest → collect
//! recommendations and totals. The engine never recommends a grade upgrade:
//! every candidate query is pinned to the player's known (or default) grade
//! for the slot, so recommendations are same-tier lateral optimizations.
//!
//! Parsing ambiguity and thin candidate pools degrade gracefully; a catalog
//! access failure aborts the whole call with no partial result.

mod config;

pub use config::EngineConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{CatalogError, Item, ItemCatalog, SlotType};
use crate::constants::MIN_CANDIDATES;
use crate::intent::{self, PlayerState, Problem};
use crate::{explain, scoring};

/// Optimal slot types to shop for, per problem category.
pub fn optimal_slots(problem: Problem) -> &'static [SlotType] {
    match problem {
        Problem::Damage => &[SlotType::Weapon, SlotType::Accessory],
        Problem::Survival => &[SlotType::Armor, SlotType::Accessory],
        Problem::Mana => &[SlotType::Accessory, SlotType::Special],
        Problem::Speed => &[SlotType::Armor, SlotType::Accessory],
        Problem::Accuracy => &[SlotType::Weapon, SlotType::Accessory],
        Problem::General => &[SlotType::Weapon, SlotType::Armor, SlotType::Accessory],
    }
}

/// Per-problem rationale templates naming the stats the pick boosts.
fn rationale_for(problem: Problem) -> &'static str {
    match problem {
        Problem::Damage => "이 아이템은 공격력과 치명타를 크게 향상시켜 딜링 문제를 해결해줍니다.",
        Problem::Survival => "이 아이템은 방어력과 체력을 크게 향상시켜 생존 문제를 해결해줍니다.",
        Problem::Mana => "이 아이템은 마나와 마나 회복을 크게 향상시켜 마나 문제를 해결해줍니다.",
        Problem::Speed => "이 아이템은 민첩과 이동속도를 크게 향상시켜 속도 문제를 해결해줍니다.",
        Problem::Accuracy => "이 아이템은 정확도를 크게 향상시켜 명중률 문제를 해결해줍니다.",
        Problem::General => "이 아이템은 전반적인 스탯을 향상시켜 게임 플레이를 개선해줍니다.",
    }
}

/// One recommended equipment change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub slot: SlotType,
    pub item: Item,
    /// Score delta over the compared same-grade alternative.
    pub improvement: f32,
    /// The single problem this recommendation was scored against.
    pub problem: Problem,
    pub rationale: String,
}

/// Ordered recommendations plus aggregate cost and improvement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub total_cost: u64,
    pub total_improvement: f32,
}

impl RecommendationSet {
    fn collect(recommendations: Vec<Recommendation>) -> Self {
        let total_cost = recommendations.iter().map(|r| r.item.cost).sum();
        let total_improvement = recommendations.iter().map(|r| r.improvement).sum();
        Self {
            recommendations,
            total_cost,
            total_improvement,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }
}

/// Full result of a `recommend` call: parsed intent, the recommendation set,
/// and the rendered explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub intent: PlayerState,
    pub set: RecommendationSet,
    pub explanation: String,
}

/// Failure surfaced by `recommend`. Parsing never fails, so the only error
/// path is catalog access.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("item catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

/// Request-scoped, stateless recommendation engine over an [`ItemCatalog`].
pub struct RecommendationEngine<C: ItemCatalog> {
    catalog: C,
    config: EngineConfig,
}

impl<C: ItemCatalog> RecommendationEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: C, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Produce same-tier equipment recommendations for a free-text request.
    ///
    /// Deterministic for an unchanged catalog: problems iterate in enum
    /// declaration order and candidates arrive cost-ascending, so two calls
    /// with the same text yield identical sets.
    pub fn recommend(&self, text: &str) -> Result<RecommendationReport, RecommendError> {
        let intent = intent::parse(text);
        info!(
            problems = ?intent.problems,
            difficulty = intent.difficulty.as_str(),
            weapon_grade = ?intent.weapon_grade,
            "parsed player intent"
        );

        let mut recommendations = Vec::new();
        for &problem in &intent.problems {
            for &slot in optimal_slots(problem) {
                let grade = intent
                    .grade_for(slot)
                    .unwrap_or(self.config.default_grade);
                let candidates = self.catalog.items_of_type_and_grade(slot, grade)?;
                if candidates.len() < MIN_CANDIDATES {
                    debug!(
                        problem = problem.as_str(),
                        slot = slot.as_str(),
                        grade,
                        count = candidates.len(),
                        "skipping slot, not enough candidates to compare"
                    );
                    continue;
                }

                // Candidates arrive cost-ascending; compare the two cheapest
                // under the singleton problem set so each recommendation is
                // scored against exactly the problem it was generated for.
                let comparison = scoring::compare(&candidates[0], &candidates[1], &[problem]);
                recommendations.push(Recommendation {
                    slot,
                    improvement: comparison.improvement,
                    problem,
                    rationale: rationale_for(problem).to_string(),
                    item: comparison.winner,
                });
            }
        }

        let set = RecommendationSet::collect(recommendations);
        let explanation = explain::format(&intent, &set);
        info!(
            recommendations = set.len(),
            total_cost = set.total_cost,
            "recommendation set assembled"
        );
        Ok(RecommendationReport {
            intent,
            set,
            explanation,
        })
    }
}
