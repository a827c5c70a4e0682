//! forge-export
//!
//! Pitch deck PDF rendering and Markdown panels for every generated
//! document. A deck is composed into a story of blocks, paginated with the
//! palette of the requested page geometry, then serialized with the
//! standard Helvetica faces.

pub mod deck;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod render;
pub mod styles;

use serde_json::Value;
use tracing::{debug, info};

use forge_core::models::deck::Deck;

use crate::error::ExportError;
use crate::layout::LaidOutDocument;
use crate::styles::PageGeometry;

/// Compose and paginate `deck` without serializing it.
pub fn layout_deck(deck: &Deck, geometry: PageGeometry) -> LaidOutDocument {
    let story = deck::compose(deck);
    debug!(blocks = story.blocks().len(), %geometry, "composed deck story");
    layout::paginate(&story, geometry)
}

/// Render a validated deck to PDF bytes.
pub fn render_deck(deck: &Deck, geometry: PageGeometry) -> Result<Vec<u8>, ExportError> {
    let document = layout_deck(deck, geometry);

    let clipped = document.pages.iter().filter(|p| p.clipped).count();
    let title = document_title(deck);
    let bytes = pdf::generate_pdf(&document, &title);

    info!(
        title = %title,
        %geometry,
        pages = document.pages.len(),
        clipped,
        bytes = bytes.len(),
        "rendered pitch deck"
    );
    Ok(bytes)
}

/// Validate an untyped deck and render it. Nothing is laid out when
/// validation fails.
pub fn render_deck_value(value: &Value, geometry: PageGeometry) -> Result<Vec<u8>, ExportError> {
    let deck = Deck::from_value(value)?;
    render_deck(&deck, geometry)
}

/// Download name for a deck titled `title`, e.g. `pitch_deck_star_miner.pdf`.
pub fn pitch_deck_file_name(title: &str) -> String {
    let mut slug = String::new();
    for c in title.trim().chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        "pitch_deck_game.pdf".to_string()
    } else {
        format!("pitch_deck_{slug}.pdf")
    }
}

fn document_title(deck: &Deck) -> String {
    match deck.title_section.title.trim() {
        "" => "Pitch Deck".to_string(),
        title => format!("{title} Pitch Deck"),
    }
}
