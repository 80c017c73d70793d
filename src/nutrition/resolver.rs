//! Ingredient name resolution
//!
//! Maps a normalized ingredient name to a per-100g reference profile.
//! Resolution is tried in order: exact key, substring containment in either
//! direction (first hit in dataset order wins), then category keywords.
//! An empty name resolves to nothing, although every key contains "".
//! The matching is deliberately coarse; changing it changes computed
//! nutrition for existing recipes.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::{NutritionError, NutritionResult};
use crate::models::NutrientProfile;

/// Embedded reference dataset
static REFERENCE_JSON: &str = include_str!("../data/reference_foods.json");

static BUILTIN: LazyLock<NutrientDatabase> = LazyLock::new(|| {
    NutrientDatabase::from_json(REFERENCE_JSON)
        .expect("embedded reference_foods.json should be a valid dataset")
});

// =============================================================================
// Data structures
// =============================================================================

/// One canonical ingredient in the reference dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceFood {
    pub name: String,
    #[serde(flatten)]
    pub profile: NutrientProfile,
}

/// Generic nouns that map to a representative profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keywords: Vec<String>,
    /// Dataset key of the representative profile
    pub profile: String,
}

#[derive(Deserialize)]
struct DatasetFile {
    version: String,
    ingredients: Vec<ReferenceFood>,
    #[serde(default)]
    categories: Vec<CategoryRule>,
}

/// How a name was matched against the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Substring,
    Category,
}

/// A successful resolution
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// Dataset key that supplied the profile
    pub key: &'a str,
    pub profile: &'a NutrientProfile,
    pub kind: MatchKind,
}

/// Immutable reference dataset of nutrient profiles
///
/// Ingredients keep their definition order, which is the substring tie-break.
#[derive(Debug, Clone)]
pub struct NutrientDatabase {
    version: String,
    foods: Vec<ReferenceFood>,
    categories: Vec<CategoryRule>,
}

// =============================================================================
// Loading
// =============================================================================

impl NutrientDatabase {
    /// The built-in dataset, parsed once per process
    pub fn builtin() -> &'static NutrientDatabase {
        &BUILTIN
    }

    /// Load a dataset from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> NutritionResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a dataset document
    pub fn from_json(json: &str) -> NutritionResult<Self> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::new(file.version, file.ingredients, file.categories)
    }

    /// Build a dataset, rejecting values that would break the engine's invariants
    pub fn new(
        version: String,
        foods: Vec<ReferenceFood>,
        categories: Vec<CategoryRule>,
    ) -> NutritionResult<Self> {
        let mut seen = HashSet::new();

        for food in &foods {
            let name = food.name.as_str();
            if name.is_empty() || name.trim() != name || name.to_lowercase() != name {
                return Err(NutritionError::Dataset(format!(
                    "ingredient key '{}' must be non-empty, trimmed and lowercase",
                    name
                )));
            }
            if !seen.insert(name) {
                return Err(NutritionError::Dataset(format!(
                    "duplicate ingredient key '{}'",
                    name
                )));
            }
            for (field, value) in food.profile.fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(NutritionError::Dataset(format!(
                        "'{}' has invalid {} value {}",
                        name, field, value
                    )));
                }
            }
        }

        for rule in &categories {
            if !seen.contains(rule.profile.as_str()) {
                return Err(NutritionError::Dataset(format!(
                    "category rule points at unknown profile '{}'",
                    rule.profile
                )));
            }
            if rule.keywords.iter().any(|k| k.is_empty() || k.to_lowercase() != *k) {
                return Err(NutritionError::Dataset(format!(
                    "category keywords for '{}' must be non-empty lowercase",
                    rule.profile
                )));
            }
        }

        Ok(Self {
            version,
            foods,
            categories,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Reference foods in definition order
    pub fn foods(&self) -> &[ReferenceFood] {
        &self.foods
    }

    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }

    /// Profile stored under an exact key
    pub fn get(&self, key: &str) -> Option<&NutrientProfile> {
        self.foods
            .iter()
            .find(|food| food.name == key)
            .map(|food| &food.profile)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve a normalized (lowercase, trimmed) ingredient name
    ///
    /// Returns None when nothing matches; callers treat that as a zero contribution.
    pub fn resolve(&self, name: &str) -> Option<Resolution<'_>> {
        // An empty needle would be contained in every key
        if name.is_empty() {
            return None;
        }

        if let Some(food) = self.foods.iter().find(|food| food.name == name) {
            return Some(Resolution {
                key: &food.name,
                profile: &food.profile,
                kind: MatchKind::Exact,
            });
        }

        if let Some(food) = self
            .foods
            .iter()
            .find(|food| name.contains(food.name.as_str()) || food.name.contains(name))
        {
            return Some(Resolution {
                key: &food.name,
                profile: &food.profile,
                kind: MatchKind::Substring,
            });
        }

        self.categories
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| name.contains(k.as_str())))
            .and_then(|rule| {
                self.foods
                    .iter()
                    .find(|food| food.name == rule.profile)
                    .map(|food| Resolution {
                        key: &food.name,
                        profile: &food.profile,
                        kind: MatchKind::Category,
                    })
            })
    }
}
