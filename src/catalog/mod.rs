//! Item catalog - equipment data and the read capability the engine consumes.
//!
//! The engine only ever needs one query: items of a given slot type and
//! grade, cheapest first. [`ItemCatalog`] models that capability; backends
//! are the embedded SQLite adapter ([`sqlite::SqliteCatalog`]) and a
//! vec-backed [`MemoryCatalog`] for tests and benches.

pub mod sqlite;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::StatBlock;

/// Equipment slot classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Weapon,
    Armor,
    Accessory,
    Special,
}

impl SlotType {
    pub const ALL: [SlotType; 4] = [
        SlotType::Weapon,
        SlotType::Armor,
        SlotType::Accessory,
        SlotType::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Weapon => "weapon",
            SlotType::Armor => "armor",
            SlotType::Accessory => "accessory",
            SlotType::Special => "special",
        }
    }

    /// Korean label used by the catalog data.
    pub fn label_ko(&self) -> &'static str {
        match self {
            SlotType::Weapon => "무기",
            SlotType::Armor => "방어구",
            SlotType::Accessory => "장신구",
            SlotType::Special => "특수",
        }
    }

    /// Parse a catalog label, accepting both Korean and English forms.
    pub fn parse_label(label: &str) -> Option<SlotType> {
        SlotType::ALL
            .into_iter()
            .find(|s| s.label_ko() == label || s.as_str() == label)
    }
}

/// Rarity label, derived from the numeric grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Grade-to-rarity mapping used by the catalog data
    /// (3 → uncommon, 4 → rare, 5 → epic, 6+ → legendary).
    pub fn from_grade(grade: u32) -> Self {
        match grade {
            0..=2 => Rarity::Common,
            3 => Rarity::Uncommon,
            4 => Rarity::Rare,
            5 => Rarity::Epic,
            _ => Rarity::Legendary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// A catalog equipment item. Read-only to the recommendation core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub slot: SlotType,
    /// Structured stats, parsed from `stat_text` at catalog-load time.
    pub stats: StatBlock,
    /// Raw free-text stat description, kept for explanations.
    pub stat_text: String,
    pub grade: u32,
    pub rarity: Rarity,
    pub cost: u64,
}

/// Catalog access failure. The one error the engine surfaces to callers.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),
}

/// Read capability consumed by the recommendation engine.
///
/// Implementations must return items ordered by cost ascending; the
/// comparator's tie-break relies on that ordering to favor cheaper items.
pub trait ItemCatalog {
    fn items_of_type_and_grade(&self, slot: SlotType, grade: u32)
        -> Result<Vec<Item>, CatalogError>;
}

/// Vec-backed catalog for tests, benches, and embedding without SQLite.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: Vec<Item>,
}

impl MemoryCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }
}

impl ItemCatalog for MemoryCatalog {
    fn items_of_type_and_grade(
        &self,
        slot: SlotType,
        grade: u32,
    ) -> Result<Vec<Item>, CatalogError> {
        let mut matches: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.slot == slot && item.grade == grade)
            .cloned()
            .collect();
        matches.sort_by_key(|item| item.cost);
        Ok(matches)
    }
}
