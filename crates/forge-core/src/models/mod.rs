pub mod analysis;
pub mod concept;
pub mod core_loop;
pub mod deck;
pub mod game_flow;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The five documents the content generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DocumentKind {
    Concept,
    CompetitorAnalysis,
    CoreLoop,
    GameFlow,
    PitchDeck,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Concept,
        DocumentKind::CompetitorAnalysis,
        DocumentKind::CoreLoop,
        DocumentKind::GameFlow,
        DocumentKind::PitchDeck,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Concept => "concept",
            DocumentKind::CompetitorAnalysis => "competitor_analysis",
            DocumentKind::CoreLoop => "core_loop",
            DocumentKind::GameFlow => "game_flow",
            DocumentKind::PitchDeck => "pitch_deck",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Concept => "One-Page Game Design Document",
            DocumentKind::CompetitorAnalysis => "Competitor Analysis",
            DocumentKind::CoreLoop => "Detailed Core Loop",
            DocumentKind::GameFlow => "Game Flow",
            DocumentKind::PitchDeck => "Pitch Deck",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownDocumentKind(s.to_string()))
    }
}
