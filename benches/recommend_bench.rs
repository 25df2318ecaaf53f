use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gear_advisor::catalog::{Item, MemoryCatalog, Rarity, SlotType};
use gear_advisor::engine::RecommendationEngine;
use gear_advisor::{intent, scoring, stats};

const QUERY: &str = "던전 클리어가 너무 어려워, 현재 무기 등급 3인데 공격력이 부족해";

fn item(id: i64, slot: SlotType, cost: u64, stat_text: &str) -> Item {
    Item {
        id,
        name: format!("item-{id}"),
        slot,
        stats: stats::extract(stat_text),
        stat_text: stat_text.to_string(),
        grade: 3,
        rarity: Rarity::from_grade(3),
        cost,
    }
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("stats_extract", |b| {
        b.iter(|| stats::extract(black_box("공격력+50, 방어력+30, 치명타+15%, 마나+100")))
    });

    c.bench_function("intent_parse", |b| {
        b.iter(|| intent::parse(black_box(QUERY)))
    });
}

fn bench_scoring(c: &mut Criterion) {
    let a = item(1, SlotType::Weapon, 10_000, "공격력+40, 치명타+5");
    let b_item = item(2, SlotType::Weapon, 12_000, "공격력+30, 치명타+20");
    let problems = [intent::Problem::Damage];

    c.bench_function("compare_pair", |b| {
        b.iter(|| scoring::compare(black_box(&a), black_box(&b_item), black_box(&problems)))
    });
}

fn bench_recommend(c: &mut Criterion) {
    let catalog = MemoryCatalog::new(vec![
        item(1, SlotType::Weapon, 10_000, "공격력+40, 치명타+5"),
        item(2, SlotType::Weapon, 12_000, "공격력+30, 치명타+20"),
        item(3, SlotType::Accessory, 8_000, "치명타+10"),
        item(4, SlotType::Accessory, 9_000, "치명타+25"),
    ]);
    let engine = RecommendationEngine::new(catalog);

    c.bench_function("recommend_full_pipeline", |b| {
        b.iter(|| engine.recommend(black_box(QUERY)).unwrap())
    });
}

criterion_group!(benches, bench_parsing, bench_scoring, bench_recommend);
criterion_main!(benches);
