//! Problem-weighted item scoring and same-tier comparison.
//!
//! Each problem category maps to a table of (stat, weight) rows; an item's
//! score for a problem set is the sum of its weighted contributions over all
//! problems in the set. `General` has no weight rows and falls back to the
//! unweighted sum of every stat; the same fallback arm covers any future
//! category without an explicit table entry.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::intent::Problem;
use crate::stats::{Stat, StatBlock};

/// Weight rows for a problem, `None` for the unweighted-sum fallback.
fn weight_rows(problem: Problem) -> Option<&'static [(Stat, f32)]> {
    match problem {
        Problem::Damage => Some(&[(Stat::Attack, 2.0), (Stat::Crit, 1.5)]),
        Problem::Survival => Some(&[(Stat::Defense, 2.0), (Stat::Health, 1.5)]),
        Problem::Mana => Some(&[(Stat::Mana, 2.0)]),
        Problem::Speed => Some(&[(Stat::Dex, 2.0)]),
        Problem::Accuracy => Some(&[(Stat::Accuracy, 2.0)]),
        Problem::General => None,
    }
}

/// Score a stat block against a problem set.
///
/// Contributions from multiple problems are summed, not averaged: an item
/// that addresses more of the player's stated problems accumulates a higher
/// score. Missing stats contribute zero.
pub fn score(stats: &StatBlock, problems: &[Problem]) -> f32 {
    problems
        .iter()
        .map(|&problem| match weight_rows(problem) {
            Some(rows) => rows
                .iter()
                .map(|&(stat, weight)| stats.get(stat) as f32 * weight)
                .sum(),
            None => stats.total() as f32,
        })
        .sum()
}

/// Outcome of a same-tier comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub winner: Item,
    pub loser: Item,
    /// Absolute score delta between the two candidates.
    pub improvement: f32,
}

/// Compare two same-grade candidates under a problem set.
///
/// The winner holds the strictly greater score; on a tie the first argument
/// wins. Callers pass candidates in the catalog's cost-ascending order, so
/// the tie-break deliberately favors the cheaper item. Grade equality is the
/// caller's contract and is not checked here.
pub fn compare(a: &Item, b: &Item, problems: &[Problem]) -> Comparison {
    let score_a = score(&a.stats, problems);
    let score_b = score(&b.stats, problems);
    let improvement = (score_a - score_b).abs();
    if score_a >= score_b {
        Comparison {
            winner: a.clone(),
            loser: b.clone(),
            improvement,
        }
    } else {
        Comparison {
            winner: b.clone(),
            loser: a.clone(),
            improvement,
        }
    }
}
