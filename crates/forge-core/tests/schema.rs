use forge_core::DocumentKind;
use forge_core::schema::response_schema;
use serde_json::Value;

fn required(schema: &Value) -> Vec<&str> {
    schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[test]
fn every_kind_has_an_object_schema() {
    for kind in DocumentKind::ALL {
        let schema = response_schema(kind);
        assert_eq!(schema["type"], "object", "{kind}");
        assert!(!required(&schema).is_empty(), "{kind}");
    }
}

#[test]
fn deck_schema_lists_sections_in_order() {
    let schema = response_schema(DocumentKind::PitchDeck);
    assert_eq!(
        required(&schema),
        [
            "title_section",
            "problem_section",
            "solution_section",
            "market_section",
            "business_model_section",
            "differentiation_section",
            "roadmap_section",
            "team_section",
            "financials_section",
            "call_to_action_section",
            "target_audience",
            "presentation_duration",
            "presentation_tips",
        ]
    );
}

#[test]
fn deck_section_shapes_follow_variant() {
    let schema = response_schema(DocumentKind::PitchDeck);
    let props = &schema["properties"];

    assert_eq!(
        required(&props["title_section"]),
        ["title", "body", "key_points", "suggested_visual"]
    );
    assert_eq!(props["roadmap_section"]["properties"]["phases"]["type"], "array");
    assert_eq!(
        props["roadmap_section"]["properties"]["phases"]["items"]["type"],
        "string"
    );
    assert_eq!(
        props["business_model_section"]["properties"]["break_even"]["type"],
        "string"
    );
}

#[test]
fn concept_schema_nests_mechanics() {
    let schema = response_schema(DocumentKind::Concept);
    let mechanics = &schema["properties"]["core_mechanics"];
    assert_eq!(mechanics["type"], "array");
    assert_eq!(required(&mechanics["items"]), ["name", "description"]);
}

#[test]
fn document_kind_parses_loosely() {
    assert_eq!(
        "pitch-deck".parse::<DocumentKind>().unwrap(),
        DocumentKind::PitchDeck
    );
    assert_eq!(
        " Core_Loop ".parse::<DocumentKind>().unwrap(),
        DocumentKind::CoreLoop
    );
    assert!("storyboard".parse::<DocumentKind>().is_err());
}
