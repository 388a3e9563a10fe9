use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Weight on the cat-mouse distance (positive: far cat is good for the
    /// mouse).
    pub cat_distance_weight: i32,
    /// Weight on the mouse-exit distance (subtracted: close exit is good).
    pub exit_distance_weight: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies the cat looks ahead. Signed so a hand-edited config cannot
    /// drive the search into the ground; negative values clamp to 0.
    pub depth: i32,
}

impl SearchConfig {
    pub fn clamped_depth(&self) -> u32 {
        self.depth.max(0) as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub dim: usize,
}

static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "ai_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// Process-wide cached config; loaded once on first access.
    pub fn get() -> &'static AIConfig {
        &CONFIG
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig {
                cat_distance_weight: 2,
                exit_distance_weight: 3,
            },
            search: SearchConfig { depth: 3 },
            board: BoardConfig { dim: 8 },
        }
    }
}
