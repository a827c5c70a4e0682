//! Seam to the external content generator.
//!
//! The hosted language model lives outside this workspace. Callers
//! implement [`ContentGenerator`] (and optionally [`ImageGenerator`]) over
//! whatever client they use; this module turns raw responses into typed
//! documents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::GenerationError;
use crate::models::concept::Concept;
use crate::prompts::concept_art_prompt;

/// Everything a generator needs to produce one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub system_instruction: Option<String>,
    /// When present the generator must answer with JSON matching it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response_schema: Option<serde_json::Value>,
    pub model: String,
}

/// Raw generator output: parsed JSON when a schema was requested, text
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedContent {
    Json(serde_json::Value),
    Text(String),
}

pub trait ContentGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, GenerationError>;
}

/// An encoded image returned by an [`ImageGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub trait ImageGenerator {
    /// Returns `None` when the backend produced no usable image.
    fn generate_image(&self, prompt: &str) -> Option<GeneratedImage>;
}

/// Run `request` through `generator` and decode the JSON answer as `T`.
///
/// No retries happen here; re-asking the model is the caller's decision.
pub fn generate_document<T, G>(generator: &G, request: &GenerationRequest) -> Result<T, GenerationError>
where
    T: DeserializeOwned,
    G: ContentGenerator + ?Sized,
{
    info!(model = %request.model, prompt_len = request.prompt.len(), "requesting document");

    let value = match generator.generate(request)? {
        GeneratedContent::Json(value) => value,
        // Some backends hand back the JSON as text even in schema mode.
        GeneratedContent::Text(text) if request.response_schema.is_some() => {
            serde_json::from_str(strip_code_fence(&text)).map_err(|e| {
                GenerationError::SchemaViolation(format!("response was not JSON: {e}"))
            })?
        }
        GeneratedContent::Text(_) => return Err(GenerationError::UnexpectedText),
    };

    let document = serde_json::from_value(value)
        .map_err(|e| GenerationError::SchemaViolation(e.to_string()))?;

    debug!(model = %request.model, "document decoded");
    Ok(document)
}

/// Ask for concept art, logging instead of failing when nothing comes back.
pub fn concept_art<G>(generator: &G, concept: &Concept) -> Option<GeneratedImage>
where
    G: ImageGenerator + ?Sized,
{
    let prompt = concept_art_prompt(concept);
    let image = generator.generate_image(&prompt);
    match &image {
        Some(img) => info!(
            title = concept.display_title(),
            mime_type = %img.mime_type,
            size = img.bytes.len(),
            "concept art generated"
        ),
        None => warn!(
            title = concept.display_title(),
            "image generator returned no image; falling back to placeholder"
        ),
    }
    image
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
