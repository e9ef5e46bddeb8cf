//! Fuzzy disease/symptom matcher.
//!
//! Ranking precedence for type-ahead: substring name match, then fuzzy name
//! match, then symptom match. Tiers are concatenated in that order and never
//! re-sorted together; substring trust outranks fuzzy-name similarity, which
//! outranks symptom inference.

mod similarity;

pub use similarity::{edit_distance, similarity};

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::{Disease, Suggestion, SymptomMatch};

/// Default minimum similarity for a fuzzy candidate to qualify.
const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Default cap on the unified suggestion list.
const SUGGESTION_LIMIT: usize = 10;

/// Tuning knobs for the matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Minimum similarity score for fuzzy name/symptom candidates.
    pub similarity_threshold: f64,
    /// Maximum number of type-ahead suggestions returned by [`Matcher::suggest`].
    pub suggestion_limit: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: SIMILARITY_THRESHOLD,
            suggestion_limit: SUGGESTION_LIMIT,
        }
    }
}

/// Fuzzy matcher over a read-only catalog.
///
/// Pure and synchronous: no interior mutability, no I/O, no allocation shared
/// between calls. Any number of concurrent callers may share one matcher.
pub struct Matcher<'a> {
    catalog: &'a Catalog,
    config: MatcherConfig,
}

impl<'a> Matcher<'a> {
    /// Create a matcher with default thresholds.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, MatcherConfig::default())
    }

    /// Create a matcher with custom thresholds.
    pub fn with_config(catalog: &'a Catalog, config: MatcherConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog this matcher reads from.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The active configuration.
    pub fn config(&self) -> MatcherConfig {
        self.config
    }

    /// Diseases whose name contains the query as a case-insensitive
    /// substring, in catalog order.
    ///
    /// Empty or whitespace-only queries match nothing.
    pub fn name_matches(&self, query: &str) -> Vec<&'a Disease> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.catalog
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&q))
            .collect()
    }

    /// Fuzzy name candidates clearing the similarity threshold, skipping
    /// names present in `exclude` (typically the substring matches already
    /// shown).
    ///
    /// Sorted descending by score; the sort is stable, so ties keep catalog
    /// order.
    pub fn fuzzy_name_suggestions(
        &self,
        query: &str,
        exclude: &HashSet<&str>,
    ) -> Vec<Suggestion<'a>> {
        let mut out: Vec<Suggestion<'a>> = self
            .catalog
            .iter()
            .filter(|d| !exclude.contains(d.name.as_str()))
            .filter_map(|disease| {
                let score = similarity(&disease.name, query);
                (score >= self.config.similarity_threshold).then_some(Suggestion {
                    disease,
                    matched_symptom: None,
                    score,
                })
            })
            .collect();
        out.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        out
    }

    /// Symptom-based matches: for each disease the first qualifying symptom
    /// wins, so a disease appears at most once even when several of its
    /// symptoms qualify.
    ///
    /// An exact (trimmed, case-insensitive) symptom hit scores 1.0; otherwise
    /// a symptom qualifies when its similarity clears the threshold. Sorted
    /// descending by score; ties keep catalog order.
    pub fn symptom_matches(&self, query: &str) -> Vec<SymptomMatch<'a>> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<SymptomMatch<'a>> = Vec::new();
        for disease in self.catalog.iter() {
            for symptom in &disease.symptoms {
                let exact = symptom.trim().to_lowercase() == q;
                let score = if exact { 1.0 } else { similarity(symptom, query) };
                if exact || score >= self.config.similarity_threshold {
                    out.push(SymptomMatch {
                        disease,
                        symptom: symptom.as_str(),
                        score,
                    });
                    break;
                }
            }
        }
        out.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        out
    }

    /// Unified type-ahead suggestions, capped at the configured limit.
    ///
    /// Tier 1: substring name matches, score 1.0, catalog order.
    /// Tier 2: fuzzy name matches for diseases not already in tier 1,
    /// score-sorted.
    /// Tier 3: symptom hits deduplicated by (disease, symptom) pair,
    /// score-sorted. A disease already suggested by name may reappear here
    /// under a different symptom label.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion<'a>> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<Suggestion<'a>> = Vec::new();
        let mut named: HashSet<&str> = HashSet::new();

        for disease in self.catalog.iter() {
            if disease.name.to_lowercase().contains(&q) {
                out.push(Suggestion {
                    disease,
                    matched_symptom: None,
                    score: 1.0,
                });
                named.insert(disease.name.as_str());
            }
        }

        out.extend(self.fuzzy_name_suggestions(query, &named));

        let mut symptom_tier: Vec<Suggestion<'a>> = Vec::new();
        let mut seen_pairs: HashSet<(&str, &str)> = HashSet::new();
        for disease in self.catalog.iter() {
            for symptom in &disease.symptoms {
                let exact = symptom.trim().to_lowercase() == q;
                let score = if exact { 1.0 } else { similarity(symptom, query) };
                if (exact || score >= self.config.similarity_threshold)
                    && seen_pairs.insert((disease.name.as_str(), symptom.as_str()))
                {
                    symptom_tier.push(Suggestion {
                        disease,
                        matched_symptom: Some(symptom.as_str()),
                        score,
                    });
                }
            }
        }
        symptom_tier.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        out.extend(symptom_tier);

        out.truncate(self.config.suggestion_limit);
        out
    }
}
