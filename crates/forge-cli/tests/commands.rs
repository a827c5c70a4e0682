use std::path::{Path, PathBuf};

use forge_cli::commands::{self, ConfigUpdate, PromptInput};
use forge_cli::config::ForgeConfig;
use forge_core::DocumentKind;
use forge_core::prompts::PitchOptions;
use forge_export::styles::PageGeometry;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures")
        .join(name)
}

#[test]
fn render_writes_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out").join("deck.pdf");

    let written = commands::render(
        &fixture("pitch_deck.json"),
        Some(&out),
        Some(PageGeometry::Widescreen),
        &ForgeConfig::default(),
    )
    .unwrap();

    assert_eq!(written, out);
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn render_uses_configured_output_dir_and_download_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = ForgeConfig {
        output_dir: Some(dir.path().to_path_buf()),
        ..ForgeConfig::default()
    };

    let written = commands::render(&fixture("pitch_deck.json"), None, None, &config).unwrap();
    assert_eq!(written, dir.path().join("pitch_deck_star_miner.pdf"));
    assert!(written.exists());
}

#[test]
fn render_rejects_malformed_deck_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let deck = dir.path().join("deck.json");
    std::fs::write(&deck, r#"{ "title_section": { "title": "X" } }"#).unwrap();
    let out = dir.path().join("deck.pdf");

    let err = commands::render(&deck, Some(&out), None, &ForgeConfig::default()).unwrap_err();
    assert!(format!("{err:?}").contains("title_section"));
    assert!(!out.exists());
}

#[test]
fn markdown_prints_panel() {
    let md = commands::markdown(DocumentKind::Concept, &fixture("concept.json")).unwrap();
    assert!(md.starts_with("# Star Miner"));
}

#[test]
fn schema_is_pretty_json() {
    let text = commands::schema(DocumentKind::PitchDeck).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["type"], "object");
    assert!(text.contains('\n'));
}

#[test]
fn prompt_for_concept_needs_idea() {
    let err = commands::prompt(DocumentKind::Concept, &PromptInput::default()).unwrap_err();
    assert!(err.to_string().contains("--idea"));

    let input = PromptInput {
        idea: Some("space mining".to_string()),
        ..PromptInput::default()
    };
    let text = commands::prompt(DocumentKind::Concept, &input).unwrap();
    assert!(text.contains("Game idea: space mining"));
}

#[test]
fn prompt_for_pitch_deck_uses_options() {
    let input = PromptInput {
        concept: Some(fixture("concept.json")),
        pitch: PitchOptions {
            audience: "Publishers".to_string(),
            ..PitchOptions::default()
        },
        model: Some("test-model".to_string()),
        ..PromptInput::default()
    };
    let text = commands::prompt(DocumentKind::PitchDeck, &input).unwrap();
    let request: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(request["model"], "test-model");
    assert!(request["prompt"]
        .as_str()
        .unwrap()
        .contains("Pitch audience: Publishers"));
}

#[test]
fn prompt_for_derived_kind_needs_concept() {
    let err = commands::prompt(DocumentKind::GameFlow, &PromptInput::default()).unwrap_err();
    assert!(err.to_string().contains("--concept"));
}

#[test]
fn configure_shows_without_saving_and_saves_updates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let shown = commands::configure(&path, ConfigUpdate::default()).unwrap();
    assert!(shown.contains("\"default_geometry\": \"print\""));
    assert!(!path.exists());

    let update = ConfigUpdate {
        geometry: Some(PageGeometry::Widescreen),
        ..ConfigUpdate::default()
    };
    commands::configure(&path, update).unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\"default_geometry\": \"widescreen\""));
}
