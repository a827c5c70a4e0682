//! Caller-owned working session.
//!
//! Holds the documents generated so far (the "current" one per kind) and an
//! append-only history of every generation. Nothing here is global: the
//! presentation layer owns a [`Session`] and passes it where needed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::analysis::CompetitorAnalysis;
use crate::models::concept::Concept;
use crate::models::core_loop::DetailedCoreLoop;
use crate::models::deck::Deck;
use crate::models::game_flow::GameFlow;
use crate::prompts::PitchOptions;

/// One past generation, newest entries last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry<T> {
    pub id: Uuid,
    /// Title of the concept the document was generated for.
    pub concept_title: String,
    pub created_at: jiff::Timestamp,
    pub document: T,
}

impl<T> HistoryEntry<T> {
    fn new(concept_title: impl Into<String>, document: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            concept_title: concept_title.into(),
            created_at: jiff::Timestamp::now(),
            document,
        }
    }
}

/// A generated concept together with the idea that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub idea: String,
    pub concept: Concept,
}

/// A generated deck together with the options it was pitched with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchDeckRecord {
    pub options: PitchOptions,
    pub deck: Deck,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub current_concept: Option<Concept>,
    pub current_analysis: Option<CompetitorAnalysis>,
    pub current_core_loop: Option<DetailedCoreLoop>,
    pub current_game_flow: Option<GameFlow>,
    pub current_pitch_deck: Option<Deck>,

    pub concept_history: Vec<HistoryEntry<ConceptRecord>>,
    pub analysis_history: Vec<HistoryEntry<CompetitorAnalysis>>,
    pub core_loop_history: Vec<HistoryEntry<DetailedCoreLoop>>,
    pub game_flow_history: Vec<HistoryEntry<GameFlow>>,
    pub pitch_deck_history: Vec<HistoryEntry<PitchDeckRecord>>,
}

/// Snapshot of what a session contains, for sidebars and status lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    pub has_concept: bool,
    pub has_analysis: bool,
    pub has_core_loop: bool,
    pub has_game_flow: bool,
    pub has_pitch_deck: bool,
    pub concept_count: usize,
    pub analysis_count: usize,
    pub core_loop_count: usize,
    pub game_flow_count: usize,
    pub pitch_deck_count: usize,
    pub current_title: Option<String>,
    pub current_genre: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `concept` current and record it.
    ///
    /// Documents derived from the previous concept no longer apply, so the
    /// other current slots are cleared. Their history is kept.
    pub fn record_concept(&mut self, idea: &str, concept: Concept) {
        let title = concept.display_title().to_string();
        self.concept_history.push(HistoryEntry::new(
            title,
            ConceptRecord {
                idea: idea.to_string(),
                concept: concept.clone(),
            },
        ));
        self.current_concept = Some(concept);
        self.current_analysis = None;
        self.current_core_loop = None;
        self.current_game_flow = None;
        self.current_pitch_deck = None;
    }

    pub fn record_analysis(&mut self, analysis: CompetitorAnalysis) {
        let title = self.current_title();
        self.analysis_history.push(HistoryEntry::new(title, analysis.clone()));
        self.current_analysis = Some(analysis);
    }

    pub fn record_core_loop(&mut self, core_loop: DetailedCoreLoop) {
        let title = self.current_title();
        self.core_loop_history.push(HistoryEntry::new(title, core_loop.clone()));
        self.current_core_loop = Some(core_loop);
    }

    pub fn record_game_flow(&mut self, flow: GameFlow) {
        let title = self.current_title();
        self.game_flow_history.push(HistoryEntry::new(title, flow.clone()));
        self.current_game_flow = Some(flow);
    }

    pub fn record_pitch_deck(&mut self, deck: Deck, options: PitchOptions) {
        let title = self.current_title();
        self.pitch_deck_history.push(HistoryEntry::new(
            title,
            PitchDeckRecord {
                options,
                deck: deck.clone(),
            },
        ));
        self.current_pitch_deck = Some(deck);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            has_concept: self.current_concept.is_some(),
            has_analysis: self.current_analysis.is_some(),
            has_core_loop: self.current_core_loop.is_some(),
            has_game_flow: self.current_game_flow.is_some(),
            has_pitch_deck: self.current_pitch_deck.is_some(),
            concept_count: self.concept_history.len(),
            analysis_count: self.analysis_history.len(),
            core_loop_count: self.core_loop_history.len(),
            game_flow_count: self.game_flow_history.len(),
            pitch_deck_count: self.pitch_deck_history.len(),
            current_title: self
                .current_concept
                .as_ref()
                .map(|c| c.display_title().to_string()),
            current_genre: self.current_concept.as_ref().map(|c| c.genre.clone()),
        }
    }

    fn current_title(&self) -> String {
        self.current_concept
            .as_ref()
            .map_or("Untitled game", |c| c.display_title())
            .to_string()
    }
}

/// The last `n` entries of a history, oldest first.
pub fn recent<T>(history: &[HistoryEntry<T>], n: usize) -> &[HistoryEntry<T>] {
    let start = history.len().saturating_sub(n);
    &history[start..]
}
