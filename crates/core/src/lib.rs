//! Core library: policy document loading, concept extraction, intent
//! classification, section search, and rule-based response selection.

pub mod balance;
pub mod classifier;
pub mod config;
pub mod extractor;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod search;
pub mod suggester;
pub mod templates;

pub use models::{Intent, PolicyDocument, SearchResult};
pub use pipeline::{Answer, Assistant};
pub use search::SearchIndex;
