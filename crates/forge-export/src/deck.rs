//! Deck → story composition.
//!
//! Each section gets a banner, then one of four layout strategies chosen
//! by its shape. A page break follows every section and the story ends
//! with the summary page.

use forge_core::models::deck::{
    BusinessModelSection, Deck, MarketSection, NarrativeSection, RoadmapSection, SectionRef,
    SectionSlot,
};

use crate::layout::{Block, Story};

pub const SUMMARY_HEADING: &str = "Additional Information";
pub const CLOSING_MARK: &str = "Generated by Game Concept Forge";

const NOT_PROVIDED: &str = "Not provided";

/// Build the full story for `deck`: ten section pages plus the summary.
pub fn compose(deck: &Deck) -> Story {
    let mut story = Story::new();

    for (slot, section) in deck.sections() {
        story.push(Block::Banner(banner(slot)));
        match section {
            SectionRef::Narrative(s) => narrative(&mut story, slot, s),
            SectionRef::Market(s) => market(&mut story, s),
            SectionRef::BusinessModel(s) => business_model(&mut story, s),
            SectionRef::Roadmap(s) => roadmap(&mut story, s),
        }
        story.page_break();
    }

    summary(&mut story, deck);
    story
}

/// Banner text for a section, e.g. "Section 4: Market Analysis".
pub fn banner(slot: &SectionSlot) -> String {
    format!("Section {}: {}", slot.ordinal, slot.name)
}

fn narrative(story: &mut Story, slot: &SectionSlot, section: &NarrativeSection) {
    let title = or_not_provided(&section.title);
    // The opening slide carries the game's name in the large title style.
    if slot.ordinal == 1 {
        story.push(Block::Title(title));
    } else {
        story.push(Block::Subheading(title));
    }
    story.push(Block::Separator);
    paragraph(story, &section.body);
    list(story, "Key points", &section.key_points, "No key points provided.");
    story.push(Block::KeyValue(vec![row("Suggested visual", &section.suggested_visual)]));
}

fn market(story: &mut Story, section: &MarketSection) {
    story.push(Block::KeyValue(vec![
        row("Market size", &section.market_size),
        row("Growth", &section.market_growth),
    ]));
    list(
        story,
        "Target segments",
        &section.target_segments,
        "No target segments provided.",
    );
    list(story, "Trends", &section.trends, "No trends provided.");
    list(
        story,
        "Opportunities",
        &section.opportunities,
        "No opportunities provided.",
    );
}

fn business_model(story: &mut Story, section: &BusinessModelSection) {
    list(
        story,
        "Monetization strategies",
        &section.monetization_strategies,
        "No monetization strategies provided.",
    );
    list(
        story,
        "Revenue sources",
        &section.revenue_sources,
        "No revenue sources provided.",
    );
    list(
        story,
        "Estimated costs",
        &section.estimated_costs,
        "No estimated costs provided.",
    );
    story.push(Block::KeyValue(vec![
        row("Revenue projection", &section.revenue_projection),
        row("Break-even", &section.break_even),
    ]));
}

fn roadmap(story: &mut Story, section: &RoadmapSection) {
    story.push(Block::Subheading("Development phases".to_string()));
    let phases = non_blank(&section.phases);
    if phases.is_empty() {
        story.push(Block::Notice("No development phases provided.".to_string()));
    } else {
        for (i, phase) in phases.into_iter().enumerate() {
            story.push(Block::Bullet(format!("Phase {}: {}", i + 1, phase.trim())));
        }
    }
    story.push(Block::KeyValue(vec![row("Timeline", &section.timeline)]));
    list(
        story,
        "Key milestones",
        &section.key_milestones,
        "No key milestones provided.",
    );
    list(
        story,
        "Resources needed",
        &section.resources_needed,
        "No resources provided.",
    );
    list(story, "Risks", &section.risks, "No risks identified.");
}

fn summary(story: &mut Story, deck: &Deck) {
    story.push(Block::Banner(SUMMARY_HEADING.to_string()));
    story.push(Block::KeyValue(vec![
        row("Pitch audience", &deck.target_audience),
        row("Presentation length", &deck.presentation_duration),
    ]));
    list(
        story,
        "Presentation tips",
        &deck.presentation_tips,
        "No presentation tips provided.",
    );
    story.push(Block::Spacer(25.0));
    story.push(Block::Closing(CLOSING_MARK.to_string()));
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// A headed bullet list, or the placeholder when `items` is empty.
fn list(story: &mut Story, heading: &str, items: &[String], placeholder: &str) {
    story.push(Block::Subheading(heading.to_string()));
    let items = non_blank(items);
    if items.is_empty() {
        story.push(Block::Notice(placeholder.to_string()));
        return;
    }
    for item in items {
        story.push(Block::Bullet(item.clone()));
    }
}

pub(crate) fn non_blank(items: &[String]) -> Vec<&String> {
    items.iter().filter(|i| !i.trim().is_empty()).collect()
}

fn paragraph(story: &mut Story, text: &str) {
    if text.trim().is_empty() {
        story.push(Block::Notice("No description provided.".to_string()));
    } else {
        story.push(Block::Paragraph(text.to_string()));
    }
}

fn row(label: &str, value: &str) -> (String, String) {
    (label.to_string(), or_not_provided(value))
}

pub(crate) fn or_not_provided(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        trimmed.to_string()
    }
}
