use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Market positioning of a concept against existing games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompetitorAnalysis {
    #[serde(default)]
    pub direct_competitors: Vec<String>,
    #[serde(default)]
    pub similar_games: Vec<String>,
    #[serde(default)]
    pub competitor_strengths: Vec<String>,
    #[serde(default)]
    pub competitor_weaknesses: Vec<String>,
    #[serde(default)]
    pub differentiation_opportunities: Vec<String>,
    #[serde(default)]
    pub market_trends: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
