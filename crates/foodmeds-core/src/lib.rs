//! FoodMeds Core Library
//!
//! Disease and symptom lookup over a static nutrition catalog.
//!
//! # Architecture
//!
//! ```text
//! diseases.json ──load once──▶ Catalog (read-only, in-memory)
//!                                   │
//!                     ┌─────────────┴─────────────┐
//!                     ▼                           ▼
//!                  Matcher                 ContextRetriever
//!          name_matches / symptom_matches   disease_context
//!          suggest (tiered type-ahead)     (chat grounding text)
//! ```
//!
//! The catalog is loaded once at startup and injected read-only; matching is
//! pure and synchronous, so any number of request handlers can share one
//! matcher without synchronization.
//!
//! # Modules
//!
//! - [`catalog`]: immutable in-memory catalog loaded from static JSON
//! - [`models`]: domain types (Disease, SymptomMatch, Suggestion)
//! - [`matcher`]: substring/fuzzy name and symptom matching with tiered ranking
//! - [`retriever`]: weighted-field context snippets for the chat assistant

pub mod catalog;
pub mod matcher;
pub mod models;
pub mod retriever;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use matcher::{edit_distance, similarity, Matcher, MatcherConfig};
pub use models::{Disease, FoodInfo, Suggestion, SymptomMatch, VitaminInfo};
pub use retriever::ContextRetriever;
