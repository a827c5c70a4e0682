use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One-page game design document: the seed every other document is built
/// from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Concept {
    pub working_title: String,
    pub genre: String,
    #[serde(default)]
    pub target_platforms: Vec<String>,
    pub premise: String,
    #[serde(default)]
    pub target_audience: Vec<String>,
    pub core_loop: CoreLoop,
    #[serde(default)]
    pub core_mechanics: Vec<Mechanic>,
    #[serde(default)]
    pub monetization: Vec<MonetizationOption>,
    #[serde(default)]
    pub unique_selling_points: Vec<String>,
}

/// The action → reward → progression cycle at the heart of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoreLoop {
    pub action: String,
    pub reward: String,
    pub progression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Mechanic {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonetizationOption {
    pub kind: String,
    pub description: String,
}

impl Concept {
    /// Title used in prompts and file names; falls back when the model left
    /// it blank.
    pub fn display_title(&self) -> &str {
        let title = self.working_title.trim();
        if title.is_empty() { "Untitled game" } else { title }
    }
}
