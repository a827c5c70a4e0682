//! Prompt text for each generated document.
//!
//! Every request is built from the one-page concept; the pitch deck also
//! takes [`PitchOptions`]. The resulting [`GenerationRequest`] carries the
//! response schema so the generator can constrain its output.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::generate::GenerationRequest;
use crate::models::DocumentKind;
use crate::models::concept::Concept;
use crate::schema::response_schema;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const CONCEPT_SYSTEM_PROMPT: &str = "\
You are a game concept architect. Turn the user's initial idea into a \
structured game concept.
1. Analyse the core of the idea.
2. Describe the core loop as action, reward and progression.
3. Propose the main game mechanics.
4. Summarise everything as a concise one-page design document.
Keep it short and playable. Avoid unexplained jargon. If the idea is vague, \
make reasonable, creative assumptions to fill the gaps.";

const COMPETITOR_SYSTEM_PROMPT: &str = "\
You are a market analyst specialised in games. Analyse the concept and \
identify direct competitors, similar games in the same genre, competitor \
strengths and weaknesses, differentiation opportunities, and market trends. \
Return the analysis as structured JSON.";

const CORE_LOOP_SYSTEM_PROMPT: &str = "\
You are a game designer specialised in core loops. Develop a detailed core \
loop covering the player's primary actions, the reward system, progression, \
feedback loops, retention mechanics and initial balancing. Return the core \
loop as structured JSON.";

const GAME_FLOW_SYSTEM_PROMPT: &str = "\
You are a game designer specialised in game flow. Describe onboarding and \
tutorial, level or stage progression, player decision points, checkpoints, \
the monetization flow where applicable, and the overall user experience. \
Return the flow as structured JSON.";

const PITCH_DECK_SYSTEM_PROMPT: &str = "\
You are an expert in game pitch decks for investors, publishers and \
industry partners. Create a professional ten-slide deck:
1. Title: game name, tagline, team
2. Problem / opportunity: the market gap
3. Solution / concept: how the game fills it
4. Market analysis: size, growth, segments
5. Business model: monetization, revenue, costs
6. Differentiation: competitive advantages
7. Roadmap: development phases and timeline
8. Team / resources
9. Financial projections: revenue, ROI, break-even
10. Call to action: next steps and investment needed
Keep each slide concise. Use concrete numbers and dates where possible and \
suggest a visual for every narrative slide. Return only JSON.";

/// Presentation settings chosen before generating a pitch deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PitchOptions {
    pub audience: String,
    pub duration: String,
    pub focus: String,
    pub detail_level: String,
}

impl Default for PitchOptions {
    fn default() -> Self {
        Self {
            audience: "Investors".to_string(),
            duration: "10 minutes".to_string(),
            focus: "Market opportunity".to_string(),
            detail_level: "Medium".to_string(),
        }
    }
}

/// System instruction sent alongside the prompt for `kind`.
pub fn system_instruction(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Concept => CONCEPT_SYSTEM_PROMPT,
        DocumentKind::CompetitorAnalysis => COMPETITOR_SYSTEM_PROMPT,
        DocumentKind::CoreLoop => CORE_LOOP_SYSTEM_PROMPT,
        DocumentKind::GameFlow => GAME_FLOW_SYSTEM_PROMPT,
        DocumentKind::PitchDeck => PITCH_DECK_SYSTEM_PROMPT,
    }
}

/// Request for a one-page concept from a free-text idea.
pub fn concept_request(idea: &str, model: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: format!("Game idea: {}", idea.trim()),
        system_instruction: Some(system_instruction(DocumentKind::Concept).to_string()),
        response_schema: Some(response_schema(DocumentKind::Concept)),
        model: model.to_string(),
    }
}

/// Request for one of the documents derived from an existing concept.
///
/// `pitch` is only consulted for [`DocumentKind::PitchDeck`]; the defaults
/// apply when it is `None`.
pub fn derived_request(
    kind: DocumentKind,
    concept: &Concept,
    pitch: Option<&PitchOptions>,
    model: &str,
) -> GenerationRequest {
    let summary = concept_summary(concept);
    let prompt = match kind {
        DocumentKind::Concept => format!("Refine this game concept:\n{summary}"),
        DocumentKind::CompetitorAnalysis => {
            format!("Analyse the competitors for this game concept:\n{summary}")
        }
        DocumentKind::CoreLoop => format!("Develop a detailed core loop for:\n{summary}"),
        DocumentKind::GameFlow => format!("Create a detailed game flow for:\n{summary}"),
        DocumentKind::PitchDeck => {
            let default_options = PitchOptions::default();
            pitch_prompt(&summary, pitch.unwrap_or(&default_options))
        }
    };

    GenerationRequest {
        prompt,
        system_instruction: Some(system_instruction(kind).to_string()),
        response_schema: Some(response_schema(kind)),
        model: model.to_string(),
    }
}

/// Prompt for the concept art image.
pub fn concept_art_prompt(concept: &Concept) -> String {
    format!(
        "Concept art for a {} game titled \"{}\". {}",
        concept.genre.trim(),
        concept.display_title(),
        concept.premise.trim()
    )
}

fn pitch_prompt(summary: &str, options: &PitchOptions) -> String {
    format!(
        "Create a professional ten-slide pitch deck for the following game concept:\n\
         {summary}\n\
         Pitch audience: {}\n\
         Presentation length: {}\n\
         Main focus: {}\n\
         Level of detail: {}\n\
         Make it convincing for investors, publishers and partners: a clear \
         market opportunity, competitive differentiation, a viable business \
         model, a realistic roadmap and the potential return.\n\
         Return only the pitch deck JSON.",
        options.audience, options.duration, options.focus, options.detail_level
    )
}

/// Plain-text rendering of a concept used inside every derived prompt.
pub fn concept_summary(concept: &Concept) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "TITLE: {}", concept.display_title());
    let _ = writeln!(out, "GENRE: {}", or_unspecified(&concept.genre));
    let _ = writeln!(out, "PLATFORMS: {}", join_or_unspecified(&concept.target_platforms));
    let _ = writeln!(out, "AUDIENCE: {}", join_or_unspecified(&concept.target_audience));
    let _ = writeln!(out, "PREMISE: {}", or_unspecified(&concept.premise));
    let _ = writeln!(
        out,
        "CORE LOOP: action: {}; reward: {}; progression: {}",
        concept.core_loop.action, concept.core_loop.reward, concept.core_loop.progression
    );
    let mechanics: Vec<String> = concept
        .core_mechanics
        .iter()
        .map(|m| format!("{} ({})", m.name, m.description))
        .collect();
    let _ = writeln!(out, "MECHANICS: {}", join_or_unspecified(&mechanics));
    let monetization: Vec<String> = concept
        .monetization
        .iter()
        .map(|m| format!("{} ({})", m.kind, m.description))
        .collect();
    let _ = writeln!(out, "MONETIZATION: {}", join_or_unspecified(&monetization));
    let _ = write!(out, "USPs: {}", join_or_unspecified(&concept.unique_selling_points));
    out
}

fn or_unspecified(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { "Not specified" } else { trimmed }
}

fn join_or_unspecified(items: &[String]) -> String {
    if items.is_empty() {
        "Not specified".to_string()
    } else {
        items.join(", ")
    }
}
