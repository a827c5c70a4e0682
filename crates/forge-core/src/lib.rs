//! forge-core
//!
//! Pure domain types for Game Concept Forge: the pitch deck and the other
//! generated design documents, response schemas, prompt construction, and
//! the content generator seam. No I/O lives here.

pub mod error;
pub mod generate;
pub mod models;
pub mod prompts;
pub mod schema;
pub mod session;

pub use models::DocumentKind;
