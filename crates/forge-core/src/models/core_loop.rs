use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Expanded core loop with reward, retention and balancing detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetailedCoreLoop {
    #[serde(default)]
    pub primary_actions: Vec<String>,
    #[serde(default)]
    pub reward_system: RewardSystem,
    #[serde(default)]
    pub feedback_loops: Vec<String>,
    #[serde(default)]
    pub retention_mechanics: Vec<String>,
    #[serde(default)]
    pub balancing: Balancing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RewardSystem {
    #[serde(default)]
    pub immediate_rewards: Vec<String>,
    #[serde(default)]
    pub long_term_rewards: Vec<String>,
    #[serde(default)]
    pub progression_system: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Balancing {
    #[serde(default)]
    pub initial_difficulty: String,
    #[serde(default)]
    pub difficulty_curve: String,
    #[serde(default)]
    pub tuning_points: Vec<String>,
}
