//! Immutable disease catalog loaded from a static JSON resource.
//!
//! The catalog is loaded once at process start and never mutated afterwards;
//! the matcher and retriever borrow it read-only.

use std::fs;
use std::path::Path;
use std::slice;

use thiserror::Error;
use tracing::info;

use crate::models::Disease;

/// Catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only, in-memory disease catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    diseases: Vec<Disease>,
}

impl Catalog {
    /// Build a catalog from already-constructed records.
    pub fn new(diseases: Vec<Disease>) -> Self {
        Self { diseases }
    }

    /// Parse a catalog from its JSON representation (an array of records).
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let diseases: Vec<Disease> = serde_json::from_str(json)?;
        Ok(Self { diseases })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            entries = catalog.len(),
            "loaded disease catalog"
        );
        Ok(catalog)
    }

    /// The records in catalog order.
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    /// Iterate records in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, Disease> {
        self.diseases.iter()
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    /// Look up a record by its exact name.
    pub fn get(&self, name: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Disease;
    type IntoIter = slice::Iter<'a, Disease>;

    fn into_iter(self) -> Self::IntoIter {
        self.diseases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"name": "Anemia", "symptoms": ["fatigue"]},
            {"name": "Asthma", "symptoms": ["cough", "wheezing"]}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.diseases()[0].name, "Anemia");
    }

    #[test]
    fn test_get_by_exact_name() {
        let json = r#"[{"name": "Anemia"}, {"name": "Asthma"}]"#;
        let catalog = Catalog::from_json_str(json).unwrap();

        assert!(catalog.get("Asthma").is_some());
        // Exact-string key: case matters here, unlike the matcher
        assert!(catalog.get("asthma").is_none());
        assert!(catalog.get("Arthritis").is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = Catalog::from_json_str("{not json");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_preserves_catalog_order() {
        let json = r#"[{"name": "C"}, {"name": "A"}, {"name": "B"}]"#;
        let catalog = Catalog::from_json_str(json).unwrap();

        let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
