use thiserror::Error;

use forge_core::error::MalformedDeckError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    MalformedDeck(#[from] MalformedDeckError),

    #[error("unknown page geometry: {0} (expected `print` or `widescreen`)")]
    UnknownGeometry(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
