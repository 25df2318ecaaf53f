//! Free-text stat extraction.
//!
//! Player messages and item stat descriptions arrive as unstructured text
//! ("공격력+50, 치명타+15%", "attack 80"). Each known stat has a keyword
//! pattern (Korean + English synonyms) followed by an integer within a lazy
//! match window. Extraction is pure and never fails: text with no
//! recognizable stat keywords produces an empty block.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Named numeric attributes recognized in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Defense,
    Health,
    Mana,
    Crit,
    Dex,
    Int,
    Str,
    Accuracy,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 10] = [
        Stat::Attack,
        Stat::Defense,
        Stat::Health,
        Stat::Mana,
        Stat::Crit,
        Stat::Dex,
        Stat::Int,
        Stat::Str,
        Stat::Accuracy,
        Stat::Speed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Health => "health",
            Stat::Mana => "mana",
            Stat::Crit => "crit",
            Stat::Dex => "dex",
            Stat::Int => "int",
            Stat::Str => "str",
            Stat::Accuracy => "accuracy",
            Stat::Speed => "speed",
        }
    }

    /// Alternation of labeling keywords for this stat (Korean + English).
    fn synonyms(&self) -> &'static str {
        match self {
            Stat::Attack => "공격력|attack",
            Stat::Defense => "방어력|defense",
            Stat::Health => "체력|health|hp",
            Stat::Mana => "마나|mana|mp",
            Stat::Crit => "치명타|critical|crit",
            Stat::Dex => "민첩|dexterity|dex",
            Stat::Int => "지능|intelligence|int",
            Stat::Str => "힘|strength|str",
            Stat::Accuracy => "정확도|accuracy",
            Stat::Speed => "이동속도|speed",
        }
    }
}

/// Sparse mapping of stat name to non-negative value. Absent keys mean zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock(BTreeMap<Stat, u32>);

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a stat, zero when absent.
    pub fn get(&self, stat: Stat) -> u32 {
        self.0.get(&stat).copied().unwrap_or(0)
    }

    /// Whether the stat was actually present in the parsed text.
    pub fn contains(&self, stat: Stat) -> bool {
        self.0.contains_key(&stat)
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        self.0.insert(stat, value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        self.0.iter().map(|(&s, &v)| (s, v))
    }

    /// Unweighted sum of all present stats.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl FromIterator<(Stat, u32)> for StatBlock {
    fn from_iter<I: IntoIterator<Item = (Stat, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

static STAT_PATTERNS: LazyLock<Vec<(Stat, Regex)>> = LazyLock::new(|| {
    Stat::ALL
        .iter()
        .map(|&stat| {
            let pattern = format!(r"(?i)(?:{}).*?(\d+)", stat.synonyms());
            let regex = Regex::new(&pattern).expect("stat keyword pattern is valid");
            (stat, regex)
        })
        .collect()
});

/// Extract a [`StatBlock`] from free text.
///
/// Successive non-overlapping matches for the same stat overwrite each other:
/// the last occurrence in the text wins ("공격력 50 ... 공격력 80" → 80).
pub fn extract(text: &str) -> StatBlock {
    let mut block = StatBlock::new();
    for (stat, pattern) in STAT_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Ok(value) = caps[1].parse::<u32>() {
                block.set(*stat, value);
            }
        }
    }
    block
}
