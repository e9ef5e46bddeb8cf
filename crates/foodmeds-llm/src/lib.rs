//! LLM glue for the FoodMeds assistant and meal planner.
//!
//! Prompt construction and response parsing for two consumers: the general
//! health chat (domain-gated, optionally grounded with catalog context) and
//! the condition-specific meal-plan generator (JSON-only output contract
//! with one retry on malformed JSON). The model provider itself stays behind
//! [`planner::CompletionBackend`] - no network client lives in this crate.

pub mod chat;
pub mod planner;
pub mod prompts;

pub use chat::*;
pub use planner::*;
pub use prompts::*;
