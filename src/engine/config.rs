use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GRADE;

/// Tunable defaults for a [`super::RecommendationEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grade used for slots the player never mentioned.
    pub default_grade: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_grade: DEFAULT_GRADE,
        }
    }
}
