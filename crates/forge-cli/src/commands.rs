//! Subcommand bodies. Each returns what `main` prints so they can be
//! exercised without a terminal.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use tracing::info;

use forge_core::DocumentKind;
use forge_core::models::concept::Concept;
use forge_core::models::deck::Deck;
use forge_core::prompts::{self, PitchOptions};
use forge_core::schema::response_schema;
use forge_export::render::render_markdown;
use forge_export::styles::PageGeometry;
use forge_export::{pitch_deck_file_name, render_deck};

use crate::config::{self, ForgeConfig};

/// Render the deck at `deck_path` and write the PDF. Returns the path
/// written.
///
/// The output goes to `output` when given, else to the configured output
/// directory (or the working directory) under the download name.
pub fn render(
    deck_path: &Path,
    output: Option<&Path>,
    geometry: Option<PageGeometry>,
    config: &ForgeConfig,
) -> Result<PathBuf> {
    let text = read(deck_path)?;
    let deck = Deck::from_json(&text)
        .wrap_err_with(|| format!("invalid deck in {}", deck_path.display()))?;

    let geometry = geometry.unwrap_or(config.default_geometry);
    let bytes = render_deck(&deck, geometry)?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = config.output_dir.clone().unwrap_or_default();
            dir.join(pitch_deck_file_name(&deck.title_section.title))
        }
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &bytes)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "pitch deck written");
    Ok(path)
}

/// Markdown panel for the document of `kind` stored at `path`.
pub fn markdown(kind: DocumentKind, path: &Path) -> Result<String> {
    let document: serde_json::Value = read_json(path)?;
    Ok(render_markdown(kind, &document)?)
}

/// Pretty-printed response schema for `kind`.
pub fn schema(kind: DocumentKind) -> Result<String> {
    Ok(serde_json::to_string_pretty(&response_schema(kind))?)
}

/// Inputs for `forge prompt`.
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    /// Free-text idea; required for a concept request.
    pub idea: Option<String>,
    /// Concept document; required for every other kind.
    pub concept: Option<PathBuf>,
    pub pitch: PitchOptions,
    pub model: Option<String>,
}

/// Pretty-printed generation request for `kind`.
pub fn prompt(kind: DocumentKind, input: &PromptInput) -> Result<String> {
    let model = input.model.as_deref().unwrap_or(prompts::DEFAULT_MODEL);

    let request = match kind {
        DocumentKind::Concept => {
            let idea = input
                .idea
                .as_deref()
                .filter(|idea| !idea.trim().is_empty())
                .ok_or_else(|| eyre::eyre!("a concept request needs --idea"))?;
            prompts::concept_request(idea, model)
        }
        _ => {
            let path = input
                .concept
                .as_deref()
                .ok_or_else(|| eyre::eyre!("a {kind} request needs --concept <concept.json>"))?;
            let concept: Concept = read_json(path)?;
            prompts::derived_request(kind, &concept, Some(&input.pitch), model)
        }
    };

    Ok(serde_json::to_string_pretty(&request)?)
}

/// Changes requested by `forge config`.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub geometry: Option<PageGeometry>,
    pub output_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.geometry.is_none() && self.output_dir.is_none() && self.log_level.is_none()
    }
}

/// Apply `update` to the config at `path` (saving only when something
/// changed) and return the resulting config as JSON.
pub fn configure(path: &Path, update: ConfigUpdate) -> Result<String> {
    let mut current = config::load_config_from(path)?;

    if !update.is_empty() {
        if let Some(geometry) = update.geometry {
            current.default_geometry = geometry;
        }
        if let Some(dir) = update.output_dir {
            current.output_dir = Some(dir);
        }
        if let Some(level) = update.log_level {
            current.log_level = level;
        }
        config::save_config_to(&current, path)?;
    }

    Ok(serde_json::to_string_pretty(&current)?)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read(path)?;
    serde_json::from_str(&text).wrap_err_with(|| format!("invalid JSON in {}", path.display()))
}
