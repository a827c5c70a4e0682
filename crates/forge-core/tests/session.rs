use forge_core::models::analysis::CompetitorAnalysis;
use forge_core::models::concept::Concept;
use forge_core::models::core_loop::DetailedCoreLoop;
use forge_core::models::deck::Deck;
use forge_core::prompts::PitchOptions;
use forge_core::session::{Session, recent};

const CONCEPT: &str = include_str!("../../../test-fixtures/concept.json");
const DECK: &str = include_str!("../../../test-fixtures/pitch_deck.json");

fn concept(title: &str) -> Concept {
    let mut concept: Concept = serde_json::from_str(CONCEPT).unwrap();
    concept.working_title = title.to_string();
    concept
}

#[test]
fn empty_session_summary() {
    let summary = Session::new().summary();
    assert!(!summary.has_concept);
    assert!(!summary.has_pitch_deck);
    assert_eq!(summary.concept_count, 0);
    assert_eq!(summary.current_title, None);
}

#[test]
fn derived_documents_are_tagged_with_concept_title() {
    let mut session = Session::new();
    session.record_concept("space mining", concept("Star Miner"));
    session.record_analysis(CompetitorAnalysis::default());
    session.record_pitch_deck(Deck::from_json(DECK).unwrap(), PitchOptions::default());

    assert_eq!(session.analysis_history[0].concept_title, "Star Miner");
    assert_eq!(session.pitch_deck_history[0].concept_title, "Star Miner");
    assert_eq!(session.pitch_deck_history[0].document.options.audience, "Investors");
    assert_eq!(session.concept_history[0].document.idea, "space mining");

    let summary = session.summary();
    assert!(summary.has_concept && summary.has_analysis && summary.has_pitch_deck);
    assert!(!summary.has_core_loop);
    assert_eq!(summary.current_title.as_deref(), Some("Star Miner"));
    assert_eq!(summary.current_genre.as_deref(), Some("Roguelite"));
}

#[test]
fn new_concept_clears_current_documents_but_keeps_history() {
    let mut session = Session::new();
    session.record_concept("first", concept("Star Miner"));
    session.record_core_loop(DetailedCoreLoop::default());
    session.record_concept("second", concept("Moon Farmer"));

    assert!(session.current_core_loop.is_none());
    assert_eq!(session.core_loop_history.len(), 1);
    assert_eq!(session.concept_history.len(), 2);
    assert_eq!(session.summary().current_title.as_deref(), Some("Moon Farmer"));
}

#[test]
fn documents_without_concept_are_untitled() {
    let mut session = Session::new();
    session.record_analysis(CompetitorAnalysis::default());
    assert_eq!(session.analysis_history[0].concept_title, "Untitled game");
}

#[test]
fn recent_returns_newest_tail() {
    let mut session = Session::new();
    for title in ["A", "B", "C", "D"] {
        session.record_concept(title, concept(title));
    }

    let titles: Vec<&str> = recent(&session.concept_history, 3)
        .iter()
        .map(|e| e.concept_title.as_str())
        .collect();
    assert_eq!(titles, ["B", "C", "D"]);
    assert_eq!(recent(&session.concept_history, 10).len(), 4);
}

#[test]
fn history_entries_have_distinct_ids() {
    let mut session = Session::new();
    session.record_concept("one", concept("A"));
    session.record_concept("two", concept("B"));
    assert_ne!(session.concept_history[0].id, session.concept_history[1].id);
}
