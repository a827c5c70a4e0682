//! forge-cli
//!
//! Command-line front end: renders pitch decks to disk and prints
//! schemas, prompts and Markdown panels. Owns configuration.

pub mod commands;
pub mod config;
