use std::cell::RefCell;

use forge_core::DocumentKind;
use forge_core::error::GenerationError;
use forge_core::generate::{
    ContentGenerator, GeneratedContent, GeneratedImage, GenerationRequest, ImageGenerator,
    concept_art, generate_document,
};
use forge_core::models::analysis::CompetitorAnalysis;
use forge_core::models::concept::Concept;
use forge_core::models::deck::Deck;
use forge_core::prompts::{DEFAULT_MODEL, concept_request, derived_request};
use serde_json::json;

const CONCEPT: &str = include_str!("../../../test-fixtures/concept.json");
const DECK: &str = include_str!("../../../test-fixtures/pitch_deck.json");

/// Replays one canned answer and remembers the last request.
struct Canned {
    answer: GeneratedContent,
    seen: RefCell<Option<GenerationRequest>>,
}

impl Canned {
    fn new(answer: GeneratedContent) -> Self {
        Self {
            answer,
            seen: RefCell::new(None),
        }
    }
}

impl ContentGenerator for Canned {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedContent, GenerationError> {
        *self.seen.borrow_mut() = Some(request.clone());
        Ok(self.answer.clone())
    }
}

struct Failing;

impl ContentGenerator for Failing {
    fn generate(&self, _: &GenerationRequest) -> Result<GeneratedContent, GenerationError> {
        Err(GenerationError::Generator("quota exceeded".to_string()))
    }
}

struct Images(Option<GeneratedImage>);

impl ImageGenerator for Images {
    fn generate_image(&self, _prompt: &str) -> Option<GeneratedImage> {
        self.0.clone()
    }
}

fn concept() -> Concept {
    serde_json::from_str(CONCEPT).unwrap()
}

#[test]
fn json_answer_is_decoded() {
    let generator = Canned::new(GeneratedContent::Json(serde_json::from_str(CONCEPT).unwrap()));
    let request = concept_request("space mining", DEFAULT_MODEL);

    let concept: Concept = generate_document(&generator, &request).unwrap();
    assert_eq!(concept.working_title, "Star Miner");
    assert_eq!(generator.seen.borrow().as_ref(), Some(&request));
}

#[test]
fn fenced_text_answer_is_parsed_in_schema_mode() {
    let text = format!("```json\n{DECK}\n```");
    let generator = Canned::new(GeneratedContent::Text(text));
    let request = derived_request(DocumentKind::PitchDeck, &concept(), None, DEFAULT_MODEL);

    let deck: Deck = generate_document(&generator, &request).unwrap();
    assert_eq!(deck.title_section.title, "Star Miner");
}

#[test]
fn text_without_schema_is_unexpected() {
    let generator = Canned::new(GeneratedContent::Text("hello".to_string()));
    let mut request = concept_request("space mining", DEFAULT_MODEL);
    request.response_schema = None;

    let err = generate_document::<Concept, _>(&generator, &request).unwrap_err();
    assert!(matches!(err, GenerationError::UnexpectedText));
}

#[test]
fn non_json_text_is_a_schema_violation() {
    let generator = Canned::new(GeneratedContent::Text("Sure! Here is".to_string()));
    let request = concept_request("space mining", DEFAULT_MODEL);

    let err = generate_document::<Concept, _>(&generator, &request).unwrap_err();
    assert!(matches!(err, GenerationError::SchemaViolation(_)));
}

#[test]
fn wrong_shape_is_a_schema_violation() {
    let generator = Canned::new(GeneratedContent::Json(json!({ "premise": 3 })));
    let request = concept_request("space mining", DEFAULT_MODEL);

    let err = generate_document::<Concept, _>(&generator, &request).unwrap_err();
    assert!(matches!(err, GenerationError::SchemaViolation(_)));
}

#[test]
fn missing_lists_default_to_empty() {
    let generator = Canned::new(GeneratedContent::Json(json!({
        "direct_competitors": ["Deep Rock Galactic"]
    })));
    let request = derived_request(
        DocumentKind::CompetitorAnalysis,
        &concept(),
        None,
        DEFAULT_MODEL,
    );

    let analysis: CompetitorAnalysis = generate_document(&generator, &request).unwrap();
    assert_eq!(analysis.direct_competitors, ["Deep Rock Galactic"]);
    assert!(analysis.recommendations.is_empty());
}

#[test]
fn generator_failure_is_passed_through() {
    let request = concept_request("space mining", DEFAULT_MODEL);
    let err = generate_document::<Concept, _>(&Failing, &request).unwrap_err();
    assert!(matches!(err, GenerationError::Generator(ref msg) if msg == "quota exceeded"));
}

#[test]
fn concept_art_returns_image() {
    let image = GeneratedImage {
        mime_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };
    let generated = concept_art(&Images(Some(image.clone())), &concept());
    assert_eq!(generated, Some(image));
}

#[test]
fn concept_art_missing_image_is_none() {
    assert_eq!(concept_art(&Images(None), &concept()), None);
}
