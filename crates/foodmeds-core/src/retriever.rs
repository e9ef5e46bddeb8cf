//! Local context retrieval for grounding the chat assistant.
//!
//! Scores catalog entries against a free-text query with weighted field hits
//! and renders the top entries as a compact reference block that the prompt
//! builder can embed. Purely local - no embedding model, no index.

use std::cmp::Ordering;
use std::fmt::Write;

use crate::catalog::Catalog;
use crate::models::Disease;

/// Field weights for a whole-query substring hit.
const NAME_WEIGHT: f64 = 6.0;
const FOODS_WEIGHT: f64 = 4.0;
const ADVICE_WEIGHT: f64 = 3.0;
const SYMPTOMS_WEIGHT: f64 = 2.0;

/// Per-word bonuses for query words longer than three characters.
const NAME_WORD_BONUS: f64 = 1.0;
const FOODS_WORD_BONUS: f64 = 1.0;
const SYMPTOMS_WORD_BONUS: f64 = 0.5;

/// Default number of entries included in a context block.
pub const DEFAULT_CONTEXT_ENTRIES: usize = 2;

/// Builds reference text from the catalog for a chat query.
pub struct ContextRetriever<'a> {
    catalog: &'a Catalog,
}

impl<'a> ContextRetriever<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Render the top `max` scoring entries as a reference block, or `None`
    /// when nothing in the catalog relates to the query.
    pub fn disease_context(&self, query: &str, max: usize) -> Option<String> {
        let q = query.trim().to_lowercase();
        if q.is_empty() || self.catalog.is_empty() || max == 0 {
            return None;
        }

        let mut scored: Vec<(&Disease, f64)> = self
            .catalog
            .iter()
            .map(|d| (d, score_disease(d, &q)))
            .filter(|(_, score)| *score > 0.0)
            .collect();
        if scored.is_empty() {
            return None;
        }
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut out = String::from("Trusted local knowledge:\n");
        for (i, (disease, _)) in scored.iter().take(max).enumerate() {
            let _ = writeln!(out, "\n{}. {}", i + 1, disease.name);
            if !disease.symptoms.is_empty() {
                let _ = writeln!(out, "Symptoms: {}", disease.symptoms.join(", "));
            }
            if !disease.vitamins.is_empty() {
                let vitamins: Vec<String> = disease
                    .vitamins
                    .iter()
                    .map(|v| format!("{} ({})", v.name, v.benefit))
                    .collect();
                let _ = writeln!(out, "Vitamins: {}", vitamins.join(", "));
            }
            if !disease.foods.is_empty() {
                let foods: Vec<String> = disease
                    .foods
                    .iter()
                    .map(|f| format!("{} ({})", f.name, f.nutrients))
                    .collect();
                let _ = writeln!(out, "Foods / Diet: {}", foods.join(", "));
            }
            if !disease.general_advice.is_empty() {
                let _ = writeln!(out, "Tips: {}", disease.general_advice);
            }
        }
        Some(out)
    }
}

/// Weighted relevance of one entry for a normalized query.
fn score_disease(disease: &Disease, q: &str) -> f64 {
    let name = disease.name.to_lowercase();
    let foods = disease
        .foods
        .iter()
        .map(|f| format!("{} {}", f.name, f.nutrients))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let advice = disease.general_advice.to_lowercase();
    let symptoms = disease.symptoms.join(" ").to_lowercase();

    let mut score = 0.0;
    if name.contains(q) {
        score += NAME_WEIGHT;
    }
    if foods.contains(q) {
        score += FOODS_WEIGHT;
    }
    if advice.contains(q) {
        score += ADVICE_WEIGHT;
    }
    if symptoms.contains(q) {
        score += SYMPTOMS_WEIGHT;
    }

    for word in q.split_whitespace().filter(|w| w.len() > 3) {
        if name.contains(word) {
            score += NAME_WORD_BONUS;
        }
        if foods.contains(word) {
            score += FOODS_WORD_BONUS;
        }
        if symptoms.contains(word) {
            score += SYMPTOMS_WORD_BONUS;
        }
    }
    score
}
