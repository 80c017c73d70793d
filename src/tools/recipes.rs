//! Recipe nutrition MCP tools
//!
//! Tools that compute per-serving nutrition for a list of ingredient lines.

use serde::Serialize;

use crate::models::NutrientTotals;
use crate::nutrition::{IngredientBreakdown, NutrientDatabase, NutritionCalculator};

/// Response for calculate_nutrition
#[derive(Debug, Serialize)]
pub struct CalculateNutritionResponse {
    pub servings: u32,
    pub per_serving: NutrientTotals,
    pub ingredient_count: usize,
    pub unresolved: Vec<String>,
}

/// Response for explain_nutrition
#[derive(Debug, Serialize)]
pub struct ExplainNutritionResponse {
    pub servings: u32,
    pub dataset_version: String,
    pub ingredients: Vec<IngredientBreakdown>,
    pub total: NutrientTotals,
    pub per_serving: NutrientTotals,
    pub unresolved: Vec<String>,
    pub computed_at: String,
}

/// Compute rounded per-serving nutrition
pub fn calculate_nutrition(
    db: &NutrientDatabase,
    ingredients: &[String],
    servings: i64,
) -> Result<CalculateNutritionResponse, String> {
    let result = NutritionCalculator::new(db)
        .explain(ingredients, servings)
        .map_err(|e| e.to_string())?;

    tracing::info!(
        ingredients = ingredients.len(),
        servings = result.servings,
        calories = result.per_serving.calories,
        "calculate_nutrition"
    );

    Ok(CalculateNutritionResponse {
        servings: result.servings,
        per_serving: result.per_serving,
        ingredient_count: result.ingredients.len(),
        unresolved: result.unresolved,
    })
}

/// Compute nutrition with the per-line breakdown
pub fn explain_nutrition(
    db: &NutrientDatabase,
    ingredients: &[String],
    servings: i64,
) -> Result<ExplainNutritionResponse, String> {
    let result = NutritionCalculator::new(db)
        .explain(ingredients, servings)
        .map_err(|e| e.to_string())?;

    tracing::info!(
        ingredients = ingredients.len(),
        unresolved = result.unresolved.len(),
        "explain_nutrition"
    );

    Ok(ExplainNutritionResponse {
        servings: result.servings,
        dataset_version: db.version().to_string(),
        ingredients: result.ingredients,
        total: result.total,
        per_serving: result.per_serving,
        unresolved: result.unresolved,
        computed_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_calculate_nutrition_tool() {
        let db = NutrientDatabase::builtin();
        let resp = calculate_nutrition(db, &lines(&["2 tbsp olive oil", "1 pinch fairy"]), 1).unwrap();
        assert_eq!(resp.per_serving.calories, 265.0);
        assert_eq!(resp.ingredient_count, 2);
        assert_eq!(resp.unresolved, vec!["1 pinch fairy".to_string()]);
    }

    #[test]
    fn test_calculate_nutrition_rejects_zero_servings() {
        let db = NutrientDatabase::builtin();
        let err = calculate_nutrition(db, &lines(&["1 cup quinoa"]), 0).unwrap_err();
        assert!(err.contains("servings"));
    }

    #[test]
    fn test_explain_nutrition_tool() {
        let db = NutrientDatabase::builtin();
        let resp = explain_nutrition(db, &lines(&["1 cup quinoa", "2 eggs"]), 2).unwrap();
        assert_eq!(resp.dataset_version, "2024.1");
        assert_eq!(resp.ingredients.len(), 2);
        assert_eq!(resp.ingredients[1].matched.as_deref(), Some("egg"));
        assert!(resp.total.calories > resp.per_serving.calories);
    }
}
