//! Match results produced by the matcher.

use serde::Serialize;

use super::Disease;

/// A symptom-based match.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SymptomMatch<'a> {
    /// The matched disease
    pub disease: &'a Disease,
    /// First qualifying symptom, in the disease's symptom-list order
    pub symptom: &'a str,
    /// 1.0 for exact matches, otherwise the similarity score
    pub score: f64,
}

/// A ranked type-ahead suggestion.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion<'a> {
    /// The suggested disease
    pub disease: &'a Disease,
    /// Set when the suggestion came from a symptom rather than the name
    pub matched_symptom: Option<&'a str>,
    /// 1.0 for substring/exact hits, otherwise the similarity score
    pub score: f64,
}

impl Suggestion<'_> {
    /// Display label. Symptom-tier suggestions disclose which symptom
    /// matched ("Diabetes (thirst)"); name-tier suggestions are the bare
    /// disease name.
    pub fn label(&self) -> String {
        match self.matched_symptom {
            Some(symptom) => format!("{} ({})", self.disease.name, symptom),
            None => self.disease.name.clone(),
        }
    }
}
