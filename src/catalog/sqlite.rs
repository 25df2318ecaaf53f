//! Embedded SQLite catalog backend.
//!
//! Schema follows the collector pipeline's `items` table: stat blocks are
//! stored as free text (`base_stats`) and parsed into structured
//! [`StatBlock`]s at row-mapping time. The demo seed carries the reference
//! 15-item set used by the sample queries.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::catalog::{CatalogError, Item, ItemCatalog, Rarity, SlotType};
use crate::stats;

/// SQLite-backed [`ItemCatalog`].
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let conn = Connection::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "opened item catalog");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, CatalogError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create the `items` table if it does not exist yet.
    pub fn ensure_schema(&self) -> Result<(), CatalogError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS items (
                item_id INTEGER PRIMARY KEY,
                item_name TEXT NOT NULL,
                item_type TEXT NOT NULL,
                base_stats TEXT NOT NULL,
                description TEXT,
                grade INTEGER DEFAULT 1,
                rarity TEXT DEFAULT 'common',
                cost INTEGER DEFAULT 0
            )",
            [],
        )?;
        Ok(())
    }

    pub fn item_count(&self) -> Result<u64, CatalogError> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn insert_item(
        &self,
        id: i64,
        name: &str,
        slot: SlotType,
        base_stats: &str,
        description: &str,
        grade: u32,
        cost: u64,
    ) -> Result<(), CatalogError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO items
                (item_id, item_name, item_type, base_stats, description, grade, rarity, cost)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                id,
                name,
                slot.label_ko(),
                base_stats,
                description,
                grade,
                Rarity::from_grade(grade).as_str(),
                cost
            ],
        )?;
        Ok(())
    }

    /// Insert the reference demo item set. Safe to call repeatedly.
    pub fn seed_demo_items(&self) -> Result<usize, CatalogError> {
        let rows: [(i64, &str, SlotType, &str, &str, u32, u64); 15] = [
            (1, "용의 검", SlotType::Weapon, "공격력+50, 치명타+15%", "고대 용의 힘이 깃든 검", 5, 50_000),
            (2, "마법사의 지팡이", SlotType::Weapon, "마법공격력+60, 마나+100", "마법 에너지가 응축된 지팡이", 4, 35_000),
            (3, "암살자의 단검", SlotType::Weapon, "공격력+40, 이동속도+20%", "빠른 공격을 위한 단검", 3, 20_000),
            (4, "궁수의 석궁", SlotType::Weapon, "원거리공격력+55, 정확도+25%", "정밀한 조준이 가능한 석궁", 4, 40_000),
            (5, "용의 갑옷", SlotType::Armor, "방어력+80, 체력+150", "용의 비늘로 만든 갑옷", 5, 60_000),
            (6, "마법사의 로브", SlotType::Armor, "마법방어력+70, 마나+120", "마법 저항력이 높은 로브", 4, 45_000),
            (7, "암살자의 가죽갑옷", SlotType::Armor, "방어력+50, 민첩+30", "가벼우면서도 튼튼한 갑옷", 3, 25_000),
            (8, "궁수의 경갑", SlotType::Armor, "방어력+45, 이동속도+25%", "빠른 움직임을 위한 경갑", 3, 22_000),
            (9, "용의 목걸이", SlotType::Accessory, "모든스탯+20, 치명타피해+30%", "용의 힘을 담은 목걸이", 5, 70_000),
            (10, "마법사의 반지", SlotType::Accessory, "마법공격력+40, 마나회복+50%", "마법 증폭 반지", 4, 50_000),
            (11, "암살자의 팔찌", SlotType::Accessory, "공격속도+35%, 치명타+20%", "빠른 공격을 위한 팔찌", 4, 40_000),
            (12, "궁수의 귀걸이", SlotType::Accessory, "정확도+40%, 원거리공격력+25", "정밀한 조준을 위한 귀걸이", 3, 30_000),
            (13, "용의 심장", SlotType::Special, "모든스탯+50, 특수스킬+1", "용의 핵심 에너지", 6, 150_000),
            (14, "마법의 구슬", SlotType::Special, "마나+200, 마법저항+100%", "마법 에너지의 결정체", 5, 80_000),
            (15, "그림자의 망토", SlotType::Special, "은신+100%, 이동속도+50%", "그림자 속으로 숨을 수 있는 망토", 4, 60_000),
        ];

        for (id, name, slot, base_stats, description, grade, cost) in rows {
            self.insert_item(id, name, slot, base_stats, description, grade, cost)?;
        }
        info!(count = rows.len(), "seeded demo item catalog");
        Ok(rows.len())
    }
}

impl ItemCatalog for SqliteCatalog {
    fn items_of_type_and_grade(
        &self,
        slot: SlotType,
        grade: u32,
    ) -> Result<Vec<Item>, CatalogError> {
        let mut stmt = self.conn.prepare(
            "SELECT item_id, item_name, base_stats, grade, cost
             FROM items
             WHERE item_type = ?1 AND grade = ?2
             ORDER BY cost ASC",
        )?;
        let rows = stmt.query_map(params![slot.label_ko(), grade], |row| {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            let stat_text: String = row.get(2)?;
            let grade: u32 = row.get(3)?;
            let cost: u64 = row.get(4)?;
            Ok(Item {
                id,
                name,
                slot,
                stats: stats::extract(&stat_text),
                stat_text,
                grade,
                rarity: Rarity::from_grade(grade),
                cost,
            })
        })?;

        let items = rows.collect::<Result<Vec<Item>, rusqlite::Error>>()?;
        debug!(
            slot = slot.as_str(),
            grade,
            count = items.len(),
            "catalog query"
        );
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    fn seeded() -> SqliteCatalog {
        let catalog = SqliteCatalog::open_in_memory().unwrap();
        catalog.ensure_schema().unwrap();
        catalog.seed_demo_items().unwrap();
        catalog
    }

    #[test]
    fn test_seed_is_idempotent() {
        let catalog = seeded();
        catalog.seed_demo_items().unwrap();
        assert_eq!(catalog.item_count().unwrap(), 15);
    }

    #[test]
    fn test_query_orders_by_cost_ascending() {
        let catalog = seeded();
        let weapons = catalog
            .items_of_type_and_grade(SlotType::Weapon, 4)
            .unwrap();
        assert_eq!(weapons.len(), 2);
        assert_eq!(weapons[0].name, "마법사의 지팡이");
        assert_eq!(weapons[1].name, "궁수의 석궁");
        assert!(weapons[0].cost <= weapons[1].cost);
    }

    #[test]
    fn test_stats_parsed_at_load_time() {
        let catalog = seeded();
        let weapons = catalog
            .items_of_type_and_grade(SlotType::Weapon, 5)
            .unwrap();
        assert_eq!(weapons.len(), 1);
        let dragon_sword = &weapons[0];
        // "공격력+50, 치명타+15%"
        assert_eq!(dragon_sword.stats.get(Stat::Attack), 50);
        assert_eq!(dragon_sword.stats.get(Stat::Crit), 15);
        assert_eq!(dragon_sword.rarity, Rarity::Epic);
    }

    #[test]
    fn test_no_items_for_unknown_grade() {
        let catalog = seeded();
        let items = catalog
            .items_of_type_and_grade(SlotType::Weapon, 9)
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_file_backed_catalog_persists_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.db");
        {
            let catalog = SqliteCatalog::open(&path).unwrap();
            catalog.ensure_schema().unwrap();
            catalog.seed_demo_items().unwrap();
        }
        // Reopen and query the same file
        let catalog = SqliteCatalog::open(&path).unwrap();
        assert_eq!(catalog.item_count().unwrap(), 15);
        let specials = catalog
            .items_of_type_and_grade(SlotType::Special, 6)
            .unwrap();
        assert_eq!(specials.len(), 1);
        assert_eq!(specials[0].name, "용의 심장");
        assert_eq!(specials[0].rarity, Rarity::Legendary);
    }

    #[test]
    fn test_query_on_missing_table_fails() {
        let catalog = SqliteCatalog::open_in_memory().unwrap();
        // No ensure_schema — the query must surface the backend error
        let result = catalog.items_of_type_and_grade(SlotType::Weapon, 3);
        assert!(result.is_err());
    }
}
