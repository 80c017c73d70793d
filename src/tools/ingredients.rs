//! Ingredient MCP Tools
//!
//! Tools for inspecting how single lines parse and resolve, and for browsing
//! the reference dataset.

use serde::Serialize;

use crate::models::{NutrientProfile, ParsedIngredient};
use crate::nutrition::{
    categorize_unit, parse_ingredient, to_grams, CategoryRule, MatchKind, NutrientDatabase,
    UnitCategory,
};

/// Response for parse_ingredient
#[derive(Debug, Serialize)]
pub struct ParseIngredientResponse {
    pub line: String,
    pub parsed: ParsedIngredient,
    pub grams: f64,
    pub unit_category: UnitCategory,
}

/// Response for lookup_ingredient
#[derive(Debug, Serialize)]
pub struct LookupIngredientResponse {
    pub query: String,
    pub resolved: bool,
    pub matched: Option<String>,
    pub match_kind: Option<MatchKind>,
    /// Reference values per 100g
    pub per_100g: Option<NutrientProfile>,
}

/// Summary of a reference food for listing
#[derive(Debug, Serialize)]
pub struct ReferenceFoodSummary {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Response for list_reference_ingredients
#[derive(Debug, Serialize)]
pub struct ListReferenceIngredientsResponse {
    pub dataset_version: String,
    /// In definition order, which is the match priority
    pub ingredients: Vec<ReferenceFoodSummary>,
    pub categories: Vec<CategoryRule>,
    pub total: usize,
}

/// Parse a single line and convert it to grams
pub fn parse_ingredient_line(line: &str) -> ParseIngredientResponse {
    let parsed = parse_ingredient(line);
    let grams = to_grams(parsed.amount, &parsed.unit);
    let unit_category = categorize_unit(&parsed.unit);

    ParseIngredientResponse {
        line: line.to_string(),
        parsed,
        grams,
        unit_category,
    }
}

/// Resolve an ingredient name against the reference dataset
pub fn lookup_ingredient(db: &NutrientDatabase, name: &str) -> Result<LookupIngredientResponse, String> {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return Err("Ingredient name cannot be empty".to_string());
    }

    let response = match db.resolve(&query) {
        Some(resolution) => LookupIngredientResponse {
            resolved: true,
            matched: Some(resolution.key.to_string()),
            match_kind: Some(resolution.kind),
            per_100g: Some(*resolution.profile),
            query,
        },
        None => LookupIngredientResponse {
            query,
            resolved: false,
            matched: None,
            match_kind: None,
            per_100g: None,
        },
    };

    Ok(response)
}

/// List the reference dataset
pub fn list_reference_ingredients(db: &NutrientDatabase) -> ListReferenceIngredientsResponse {
    let ingredients: Vec<ReferenceFoodSummary> = db
        .foods()
        .iter()
        .map(|food| ReferenceFoodSummary {
            name: food.name.clone(),
            calories: food.profile.calories,
            protein: food.profile.protein,
            carbs: food.profile.carbs,
            fat: food.profile.fat,
        })
        .collect();
    let total = ingredients.len();

    ListReferenceIngredientsResponse {
        dataset_version: db.version().to_string(),
        ingredients,
        categories: db.categories().to_vec(),
        total,
    }
}
