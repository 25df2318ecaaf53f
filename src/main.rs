//! Demo driver: seeds an item catalog and runs sample queries through the
//! recommendation engine, printing each report.
//!
//! Pass queries as arguments to override the built-in samples. Set
//! `GEAR_ADVISOR_DB` to use a SQLite file instead of the in-memory demo
//! catalog (an empty database is seeded with the demo items).

use anyhow::Result;

use gear_advisor::catalog::sqlite::SqliteCatalog;
use gear_advisor::engine::RecommendationEngine;
use gear_advisor::logging;

const SAMPLE_QUERIES: [&str; 4] = [
    "던전 클리어가 너무 어려워, 현재 무기 등급 3인데 공격력이 부족해",
    "PvP에서 자꾸 죽어, 방어구 등급 4인데 생존이 안돼",
    "마나가 부족해서 스킬을 못써, 장신구 등급 3인데 마나 문제야",
    "보스 레이드에서 딜링이 부족해, 무기 등급 5인데 치명타가 낮아",
];

fn main() -> Result<()> {
    logging::init_tracing_default();

    let catalog = match std::env::var("GEAR_ADVISOR_DB") {
        Ok(path) => SqliteCatalog::open(path)?,
        Err(_) => SqliteCatalog::open_in_memory()?,
    };
    catalog.ensure_schema()?;
    if catalog.item_count()? == 0 {
        catalog.seed_demo_items()?;
    }

    let engine = RecommendationEngine::new(catalog);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<&str> = if args.is_empty() {
        SAMPLE_QUERIES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for query in queries {
        println!("--- 질문: \"{query}\" ---");
        let report = engine.recommend(query)?;
        println!(
            "추천 {}개, 총 비용 {} 골드, 총 개선 {}점",
            report.set.len(),
            report.set.total_cost,
            report.set.total_improvement
        );
        println!("{}", report.explanation);
    }

    Ok(())
}
