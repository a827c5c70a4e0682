use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tera::{Context, Tera};
use tracing::debug;

use forge_core::DocumentKind;
use forge_core::models::analysis::CompetitorAnalysis;
use forge_core::models::concept::Concept;
use forge_core::models::core_loop::DetailedCoreLoop;
use forge_core::models::deck::{Deck, SectionRef, SectionVariant};
use forge_core::models::game_flow::GameFlow;

use crate::deck::{banner, non_blank, or_not_provided};
use crate::error::ExportError;

const CONCEPT: &str = include_str!("../templates/concept.md");
const COMPETITOR_ANALYSIS: &str = include_str!("../templates/competitor_analysis.md");
const CORE_LOOP: &str = include_str!("../templates/core_loop.md");
const GAME_FLOW: &str = include_str!("../templates/game_flow.md");
const PITCH_DECK: &str = include_str!("../templates/pitch_deck.md");

/// Render a Tera template against a JSON context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// Top-level keys of `context` become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: Value,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context =
        Context::from_value(context).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Built-in Markdown template for a document kind.
pub fn builtin_template(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Concept => CONCEPT,
        DocumentKind::CompetitorAnalysis => COMPETITOR_ANALYSIS,
        DocumentKind::CoreLoop => CORE_LOOP,
        DocumentKind::GameFlow => GAME_FLOW,
        DocumentKind::PitchDeck => PITCH_DECK,
    }
}

/// Render the Markdown panel for an untyped document of `kind`.
///
/// The document is decoded into its model first so missing lists pick up
/// their defaults; a pitch deck goes through full deck validation.
pub fn render_markdown(kind: DocumentKind, document: &Value) -> Result<String, ExportError> {
    let context = match kind {
        DocumentKind::Concept => typed_context::<Concept>(document)?,
        DocumentKind::CompetitorAnalysis => {
            analysis_context(&serde_json::from_value(document.clone())?)
        }
        DocumentKind::CoreLoop => typed_context::<DetailedCoreLoop>(document)?,
        DocumentKind::GameFlow => typed_context::<GameFlow>(document)?,
        DocumentKind::PitchDeck => deck_context(&Deck::from_value(document)?)?,
    };
    debug!(kind = %kind, "rendering markdown panel");
    render_template(&format!("{kind}.md"), builtin_template(kind), context)
}

/// Render the Markdown panel for an already-validated deck.
pub fn render_deck_markdown(deck: &Deck) -> Result<String, ExportError> {
    render_template("pitch_deck.md", PITCH_DECK, deck_context(deck)?)
}

fn typed_context<T: DeserializeOwned + Serialize>(document: &Value) -> Result<Value, ExportError> {
    let model: T = serde_json::from_value(document.clone())?;
    Ok(serde_json::to_value(model)?)
}

fn analysis_context(analysis: &CompetitorAnalysis) -> Value {
    let groups = [
        ("Direct competitors", &analysis.direct_competitors),
        ("Similar games", &analysis.similar_games),
        ("Competitor strengths", &analysis.competitor_strengths),
        ("Competitor weaknesses", &analysis.competitor_weaknesses),
        (
            "Differentiation opportunities",
            &analysis.differentiation_opportunities,
        ),
        ("Market trends", &analysis.market_trends),
        ("Recommendations", &analysis.recommendations),
    ];
    let groups: Vec<Value> = groups
        .into_iter()
        .map(|(heading, items)| json!({ "heading": heading, "items": items }))
        .collect();
    json!({ "groups": groups })
}

fn deck_context(deck: &Deck) -> Result<Value, ExportError> {
    let sections = deck
        .sections()
        .map(|(slot, section)| -> Result<Value, ExportError> {
            let body = match section {
                SectionRef::Narrative(s) => serde_json::to_value(s),
                SectionRef::Market(s) => serde_json::to_value(s),
                SectionRef::BusinessModel(s) => serde_json::to_value(s),
                SectionRef::Roadmap(s) => serde_json::to_value(s),
            }?;
            Ok(json!({
                "banner": banner(slot),
                "variant": variant_name(slot.variant),
                "section": fill_blanks(body),
            }))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let title = match deck.title_section.title.trim() {
        "" => "Pitch Deck",
        title => title,
    };

    Ok(json!({
        "title": title,
        "sections": sections,
        "target_audience": or_not_provided(&deck.target_audience),
        "presentation_duration": or_not_provided(&deck.presentation_duration),
        "presentation_tips": non_blank(&deck.presentation_tips),
    }))
}

/// Blank list items are dropped and blank scalars read "Not provided", as
/// on the PDF pages. A blank `body` stays empty so the template shows its
/// own notice.
fn fill_blanks(section: Value) -> Value {
    let fields = match section {
        Value::Object(fields) => fields,
        other => return other,
    };
    fields
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) if key == "body" => Value::String(text.trim().to_string()),
                Value::String(text) => Value::String(or_not_provided(&text)),
                Value::Array(items) => Value::Array(
                    items
                        .into_iter()
                        .filter(|item| !item.as_str().is_some_and(|s| s.trim().is_empty()))
                        .collect(),
                ),
                other => other,
            };
            (key, value)
        })
        .collect()
}

fn variant_name(variant: SectionVariant) -> &'static str {
    match variant {
        SectionVariant::Narrative => "narrative",
        SectionVariant::Market => "market",
        SectionVariant::BusinessModel => "business_model",
        SectionVariant::Roadmap => "roadmap",
    }
}
