use serde_json::{Map, Value, json};

use crate::models::DocumentKind;
use crate::models::deck::{SECTION_SLOTS, SectionVariant};

/// Build the JSON schema the model must follow when producing `kind`.
///
/// Every property is listed under `required` so the model fills each one;
/// the deck validator is still lenient about list fields it receives.
pub fn response_schema(kind: DocumentKind) -> Value {
    match kind {
        DocumentKind::Concept => concept_schema(),
        DocumentKind::CompetitorAnalysis => competitor_analysis_schema(),
        DocumentKind::CoreLoop => core_loop_schema(),
        DocumentKind::GameFlow => game_flow_schema(),
        DocumentKind::PitchDeck => deck_schema(),
    }
}

fn concept_schema() -> Value {
    object([
        ("working_title", string()),
        ("genre", string()),
        ("target_platforms", string_list()),
        ("premise", string()),
        ("target_audience", string_list()),
        (
            "core_loop",
            object([
                ("action", string()),
                ("reward", string()),
                ("progression", string()),
            ]),
        ),
        (
            "core_mechanics",
            list_of(object([("name", string()), ("description", string())])),
        ),
        (
            "monetization",
            list_of(object([("kind", string()), ("description", string())])),
        ),
        ("unique_selling_points", string_list()),
    ])
}

fn competitor_analysis_schema() -> Value {
    object([
        ("direct_competitors", string_list()),
        ("similar_games", string_list()),
        ("competitor_strengths", string_list()),
        ("competitor_weaknesses", string_list()),
        ("differentiation_opportunities", string_list()),
        ("market_trends", string_list()),
        ("recommendations", string_list()),
    ])
}

fn core_loop_schema() -> Value {
    object([
        ("primary_actions", string_list()),
        (
            "reward_system",
            object([
                ("immediate_rewards", string_list()),
                ("long_term_rewards", string_list()),
                ("progression_system", string()),
            ]),
        ),
        ("feedback_loops", string_list()),
        ("retention_mechanics", string_list()),
        (
            "balancing",
            object([
                ("initial_difficulty", string()),
                ("difficulty_curve", string()),
                ("tuning_points", string_list()),
            ]),
        ),
    ])
}

fn game_flow_schema() -> Value {
    object([
        (
            "onboarding",
            object([
                ("tutorial", string()),
                ("first_steps", string_list()),
                ("initial_goals", string_list()),
            ]),
        ),
        (
            "progression",
            object([
                ("level_structure", string()),
                ("unlocks", string_list()),
                ("key_moments", string_list()),
            ]),
        ),
        ("player_decisions", string_list()),
        ("checkpoints", string_list()),
        ("monetization_flow", string_list()),
        (
            "user_experience",
            object([
                ("high_points", string_list()),
                ("low_points", string_list()),
                ("optimizations", string_list()),
            ]),
        ),
    ])
}

fn deck_schema() -> Value {
    let mut properties: Vec<(&str, Value)> = SECTION_SLOTS
        .iter()
        .map(|slot| (slot.key, section_schema(slot.variant)))
        .collect();
    properties.push(("target_audience", string()));
    properties.push(("presentation_duration", string()));
    properties.push(("presentation_tips", string_list()));
    object(properties)
}

fn section_schema(variant: SectionVariant) -> Value {
    match variant {
        SectionVariant::Narrative => object([
            ("title", string()),
            ("body", string()),
            ("key_points", string_list()),
            ("suggested_visual", string()),
        ]),
        SectionVariant::Market => object([
            ("market_size", string()),
            ("market_growth", string()),
            ("target_segments", string_list()),
            ("trends", string_list()),
            ("opportunities", string_list()),
        ]),
        SectionVariant::BusinessModel => object([
            ("monetization_strategies", string_list()),
            ("revenue_sources", string_list()),
            ("estimated_costs", string_list()),
            ("revenue_projection", string()),
            ("break_even", string()),
        ]),
        SectionVariant::Roadmap => object([
            ("phases", string_list()),
            ("timeline", string()),
            ("key_milestones", string_list()),
            ("resources_needed", string_list()),
            ("risks", string_list()),
        ]),
    }
}

// ── Builders ─────────────────────────────────────────────────────────────────

fn string() -> Value {
    json!({ "type": "string" })
}

fn string_list() -> Value {
    list_of(string())
}

fn list_of(items: Value) -> Value {
    json!({ "type": "array", "items": items })
}

/// Object schema with properties in declaration order, all required.
fn object<'a>(properties: impl IntoIterator<Item = (&'a str, Value)>) -> Value {
    let mut props = Map::new();
    let mut required = Vec::new();
    for (name, schema) in properties {
        required.push(Value::String(name.to_string()));
        props.insert(name.to_string(), schema);
    }
    json!({
        "type": "object",
        "properties": props,
        "required": required,
    })
}
