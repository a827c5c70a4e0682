use thiserror::Error;

/// A deck that cannot be rendered because a required field is missing or
/// has the wrong JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed deck at `{field}`: {reason}")]
pub struct MalformedDeckError {
    /// Dotted path of the offending field, e.g. `title_section.body`.
    pub field: String,
    pub reason: String,
}

impl MalformedDeckError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    MalformedDeck(#[from] MalformedDeckError),

    #[error("unknown document kind: {0}")]
    UnknownDocumentKind(String),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("content generation failed: {0}")]
    Generator(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("expected a JSON response but the generator returned text")]
    UnexpectedText,
}
