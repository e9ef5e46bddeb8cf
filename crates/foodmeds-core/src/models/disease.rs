//! Disease catalog models.

use serde::{Deserialize, Serialize};

/// A single disease/condition record in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    /// Display name - doubles as the catalog key by exact string
    pub name: String,
    /// Symptom strings in display order; the first qualifying symptom is
    /// the one reported for a match
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Recommended vitamins and supplements (presentation payload)
    #[serde(default)]
    pub vitamins: Vec<VitaminInfo>,
    /// Beneficial food sources (presentation payload)
    #[serde(default)]
    pub foods: Vec<FoodInfo>,
    /// Free-text dietary advice (presentation payload)
    #[serde(default)]
    pub general_advice: String,
}

/// A vitamin or supplement recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitaminInfo {
    pub name: String,
    pub benefit: String,
    #[serde(default)]
    pub dosage: Option<String>,
}

/// A beneficial food source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodInfo {
    pub name: String,
    pub nutrients: String,
    pub benefit: String,
}

impl Disease {
    /// Create a new disease record with required fields.
    pub fn new(name: String) -> Self {
        Self {
            name,
            symptoms: Vec::new(),
            vitamins: Vec::new(),
            foods: Vec::new(),
            general_advice: String::new(),
        }
    }
}
