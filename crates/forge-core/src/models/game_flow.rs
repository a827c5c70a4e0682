use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The player's journey from first launch through long-term play.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameFlow {
    #[serde(default)]
    pub onboarding: Onboarding,
    #[serde(default)]
    pub progression: Progression,
    #[serde(default)]
    pub player_decisions: Vec<String>,
    #[serde(default)]
    pub checkpoints: Vec<String>,
    #[serde(default)]
    pub monetization_flow: Vec<String>,
    #[serde(default)]
    pub user_experience: UserExperience,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Onboarding {
    #[serde(default)]
    pub tutorial: String,
    #[serde(default)]
    pub first_steps: Vec<String>,
    #[serde(default)]
    pub initial_goals: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progression {
    #[serde(default)]
    pub level_structure: String,
    #[serde(default)]
    pub unlocks: Vec<String>,
    #[serde(default)]
    pub key_moments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserExperience {
    #[serde(default)]
    pub high_points: Vec<String>,
    #[serde(default)]
    pub low_points: Vec<String>,
    #[serde(default)]
    pub optimizations: Vec<String>,
}
