use forge_core::models::deck::{Deck, SECTION_COUNT, SectionVariant};
use serde_json::{Value, json};

const FIXTURE: &str = include_str!("../../../test-fixtures/pitch_deck.json");

fn fixture() -> Value {
    serde_json::from_str(FIXTURE).unwrap()
}

#[test]
fn fixture_validates() {
    let deck = Deck::from_json(FIXTURE).unwrap();
    assert_eq!(deck.title_section.title, "Star Miner");
    assert_eq!(deck.roadmap_section.phases, ["Prototype", "Alpha", "Launch"]);
    assert!(deck.roadmap_section.risks.is_empty());
    assert_eq!(deck.presentation_tips.len(), 2);
}

#[test]
fn sections_come_in_fixed_order() {
    let deck = Deck::from_value(&fixture()).unwrap();
    let sections: Vec<_> = deck.sections().collect();
    assert_eq!(sections.len(), SECTION_COUNT);

    let ordinals: Vec<usize> = sections.iter().map(|(slot, _)| slot.ordinal).collect();
    assert_eq!(ordinals, (1..=10).collect::<Vec<_>>());

    let keys: Vec<&str> = sections.iter().map(|(slot, _)| slot.key).collect();
    assert_eq!(keys[0], "title_section");
    assert_eq!(keys[3], "market_section");
    assert_eq!(keys[9], "call_to_action_section");

    for (slot, section) in &sections {
        assert_eq!(slot.variant, section.variant());
    }
    assert_eq!(sections[4].0.variant, SectionVariant::BusinessModel);
    assert_eq!(sections[6].0.variant, SectionVariant::Roadmap);
}

#[test]
fn missing_body_is_rejected_with_path() {
    let mut value = fixture();
    value["title_section"]
        .as_object_mut()
        .unwrap()
        .remove("body");

    let err = Deck::from_value(&value).unwrap_err();
    assert_eq!(err.field, "title_section.body");
    assert_eq!(err.reason, "missing required field");
    assert!(err.to_string().contains("`title_section.body`"));
}

#[test]
fn wrong_scalar_type_is_rejected() {
    let mut value = fixture();
    value["market_section"]["market_size"] = json!(2100000000);

    let err = Deck::from_value(&value).unwrap_err();
    assert_eq!(err.field, "market_section.market_size");
    assert_eq!(err.reason, "expected a string, found a number");
}

#[test]
fn missing_section_is_rejected() {
    let mut value = fixture();
    value.as_object_mut().unwrap().remove("team_section");

    let err = Deck::from_value(&value).unwrap_err();
    assert_eq!(err.field, "team_section");
    assert_eq!(err.reason, "missing required section");
}

#[test]
fn section_must_be_an_object() {
    let mut value = fixture();
    value["roadmap_section"] = json!(["Prototype"]);

    let err = Deck::from_value(&value).unwrap_err();
    assert_eq!(err.field, "roadmap_section");
    assert_eq!(err.reason, "expected an object, found a list");
}

#[test]
fn absent_or_null_lists_are_empty() {
    let mut value = fixture();
    value["roadmap_section"]
        .as_object_mut()
        .unwrap()
        .remove("risks");
    value["title_section"]["key_points"] = Value::Null;
    value.as_object_mut().unwrap().remove("presentation_tips");

    let deck = Deck::from_value(&value).unwrap();
    assert!(deck.roadmap_section.risks.is_empty());
    assert!(deck.title_section.key_points.is_empty());
    assert!(deck.presentation_tips.is_empty());
}

#[test]
fn list_must_be_a_list() {
    let mut value = fixture();
    value["market_section"]["trends"] = json!("cross-play");

    let err = Deck::from_value(&value).unwrap_err();
    assert_eq!(err.field, "market_section.trends");
    assert_eq!(err.reason, "expected a list, found a string");
}

#[test]
fn list_items_must_be_strings() {
    let mut value = fixture();
    value["roadmap_section"]["phases"] = json!(["Prototype", 2, "Launch"]);

    let err = Deck::from_value(&value).unwrap_err();
    assert_eq!(err.field, "roadmap_section.phases[1]");
}

#[test]
fn top_level_metadata_is_required() {
    let mut value = fixture();
    value["presentation_duration"] = Value::Null;

    let err = Deck::from_value(&value).unwrap_err();
    assert_eq!(err.field, "presentation_duration");
    assert_eq!(err.reason, "expected a string, found null");
}

#[test]
fn non_object_root_is_rejected() {
    let err = Deck::from_value(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(err.field, "deck");
}

#[test]
fn invalid_json_text_is_rejected() {
    let err = Deck::from_json("{ not json").unwrap_err();
    assert_eq!(err.field, "deck");
    assert!(err.reason.starts_with("invalid JSON"));
}

#[test]
fn typed_serde_round_trip_matches_validation() {
    let validated = Deck::from_json(FIXTURE).unwrap();
    let decoded: Deck = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(validated, decoded);
}
