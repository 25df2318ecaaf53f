//! Gear Advisor - Equipment Recommendation Core
//!
//! This crate turns free-text gear complaints into same-tier equipment
//! recommendations:
//! - Stat extraction from unstructured Korean/English text
//! - Player intent parsing (grades, difficulty, problem categories)
//! - Problem-weighted multi-attribute item scoring
//! - Same-grade candidate comparison with cost-aware tie-breaks
//! - Recommendation orchestration and report rendering
//!
//! The item catalog is consumed through the [`catalog::ItemCatalog`] trait;
//! an embedded SQLite adapter and an in-memory backend are provided.

pub mod catalog;
pub mod constants;
pub mod engine;
pub mod explain;
pub mod intent;
pub mod logging;
pub mod scoring;
pub mod stats;
