//! Golden tests for the matcher against the bundled sample catalog.
//!
//! These verify ranking behavior against known query/result pairs.

use foodmeds_core::{Catalog, Matcher, Suggestion};

fn bundled_catalog() -> Catalog {
    Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/diseases.json")).unwrap()
}

/// Golden suggestion case.
struct GoldenCase {
    id: &'static str,
    query: &'static str,
    expected_count: usize,
    expected_top_label: Option<&'static str>,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "exact-name",
            query: "anemia",
            expected_count: 1,
            expected_top_label: Some("Anemia"),
        },
        GoldenCase {
            id: "name-prefix-two-hits",
            query: "diabet",
            expected_count: 2,
            expected_top_label: Some("Diabetes"),
        },
        GoldenCase {
            id: "typo-fuzzy-name",
            query: "anemai",
            expected_count: 1,
            expected_top_label: Some("Anemia"),
        },
        GoldenCase {
            id: "symptom-only",
            query: "cough",
            expected_count: 2,
            expected_top_label: Some("Asthma (cough)"),
        },
        GoldenCase {
            id: "shared-symptom",
            query: "fatigue",
            expected_count: 3,
            expected_top_label: Some("Anemia (fatigue)"),
        },
        GoldenCase {
            id: "no-match",
            query: "xyzzy",
            expected_count: 0,
            expected_top_label: None,
        },
        GoldenCase {
            id: "whitespace-only",
            query: "   ",
            expected_count: 0,
            expected_top_label: None,
        },
    ]
}

#[test]
fn test_golden_suggestions() {
    let catalog = bundled_catalog();
    let matcher = Matcher::new(&catalog);

    for case in get_golden_cases() {
        let suggestions = matcher.suggest(case.query);

        assert_eq!(
            suggestions.len(),
            case.expected_count,
            "Case {}: count mismatch for query {:?}",
            case.id,
            case.query
        );

        assert_eq!(
            suggestions.first().map(|s| s.label()),
            case.expected_top_label.map(String::from),
            "Case {}: top label mismatch",
            case.id
        );
    }
}

#[test]
fn test_name_matches_keep_catalog_order() {
    let catalog = bundled_catalog();
    let matcher = Matcher::new(&catalog);

    let names: Vec<&str> = matcher
        .name_matches("diabet")
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["Diabetes", "Diabetic Neuropathy"]);
}

#[test]
fn test_symptom_matches_share_exact_score() {
    let catalog = bundled_catalog();
    let matcher = Matcher::new(&catalog);

    let matches = matcher.symptom_matches("fatigue");
    let names: Vec<&str> = matches.iter().map(|m| m.disease.name.as_str()).collect();

    // All three list "fatigue" verbatim; ties keep catalog order
    assert_eq!(names, vec!["Anemia", "Diabetes", "Hypothyroidism"]);
    assert!(matches.iter().all(|m| m.score == 1.0));
}

/// Classify a suggestion into its ranking tier.
fn tier(suggestion: &Suggestion<'_>) -> u8 {
    match (suggestion.matched_symptom, suggestion.score) {
        (None, score) if score == 1.0 => 1,
        (None, _) => 2,
        (Some(_), _) => 3,
    }
}

#[test]
fn test_suggestion_tiers_never_interleave() {
    let catalog = bundled_catalog();
    let matcher = Matcher::new(&catalog);

    for query in ["cough", "diabet", "fatigue", "anemai", "cold", "vision"] {
        let suggestions = matcher.suggest(query);
        assert!(suggestions.len() <= 10, "limit exceeded for {query:?}");

        let tiers: Vec<u8> = suggestions.iter().map(tier).collect();
        let mut sorted = tiers.clone();
        sorted.sort_unstable();
        assert_eq!(tiers, sorted, "tiers interleaved for query {query:?}");
    }
}

#[test]
fn test_same_query_twice_is_identical() {
    let catalog = bundled_catalog();
    let matcher = Matcher::new(&catalog);

    for query in ["cough", "diabet", "anemai"] {
        assert_eq!(matcher.suggest(query), matcher.suggest(query));
        assert_eq!(matcher.name_matches(query), matcher.name_matches(query));
        assert_eq!(matcher.symptom_matches(query), matcher.symptom_matches(query));
    }
}
