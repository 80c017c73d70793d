//! Recipe nutrition aggregation
//!
//! Drives parse -> convert -> resolve for every ingredient line, sums the
//! scaled per-100g profiles and divides by servings.

use serde::Serialize;

use super::error::{NutritionError, NutritionResult};
use super::parser::parse_ingredient;
use super::resolver::{MatchKind, NutrientDatabase};
use super::units::{categorize_unit, to_grams, UnitCategory};
use crate::models::{NutrientTotals, ParsedIngredient};

/// Servings assumed when the caller does not provide a count
pub const DEFAULT_SERVINGS: i64 = 1;

/// Contribution of a single ingredient line
#[derive(Debug, Clone, Serialize)]
pub struct IngredientBreakdown {
    /// Original line as supplied
    pub line: String,
    pub parsed: ParsedIngredient,
    pub grams: f64,
    pub unit_category: UnitCategory,
    /// Dataset key that supplied the profile, if any
    pub matched: Option<String>,
    pub match_kind: Option<MatchKind>,
    /// Absolute (unrounded) nutrients contributed to the recipe total
    pub contribution: NutrientTotals,
}

impl IngredientBreakdown {
    pub fn is_resolved(&self) -> bool {
        self.matched.is_some()
    }
}

/// Full result of a recipe calculation
#[derive(Debug, Clone, Serialize)]
pub struct RecipeNutrition {
    pub servings: u32,
    pub ingredients: Vec<IngredientBreakdown>,
    /// Unrounded total for the whole recipe
    pub total: NutrientTotals,
    /// Rounded amounts per serving
    pub per_serving: NutrientTotals,
    /// Lines that matched nothing and contributed zero
    pub unresolved: Vec<String>,
}

/// Aggregates ingredient lines against a reference dataset
#[derive(Debug, Clone, Copy)]
pub struct NutritionCalculator<'a> {
    database: &'a NutrientDatabase,
}

impl Default for NutritionCalculator<'static> {
    fn default() -> Self {
        Self::new(NutrientDatabase::builtin())
    }
}

impl<'a> NutritionCalculator<'a> {
    pub fn new(database: &'a NutrientDatabase) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &'a NutrientDatabase {
        self.database
    }

    /// Per-serving nutrition for a list of ingredient lines
    pub fn calculate<I, S>(&self, lines: I, servings: i64) -> NutritionResult<NutrientTotals>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.explain(lines, servings)?.per_serving)
    }

    /// Per-serving nutrition plus the per-line breakdown
    pub fn explain<I, S>(&self, lines: I, servings: i64) -> NutritionResult<RecipeNutrition>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let servings = validate_servings(servings)?;

        let ingredients: Vec<IngredientBreakdown> = lines
            .into_iter()
            .map(|line| self.analyze_line(line.as_ref()))
            .collect();

        // Sum in a canonical order so any permutation of the input gives identical bits
        let mut contributions: Vec<NutrientTotals> =
            ingredients.iter().map(|i| i.contribution).collect();
        contributions.sort_by(|a, b| a.total_cmp(b));
        let total = contributions.into_iter().sum::<NutrientTotals>().saturated();

        let per_serving = total.scale(1.0 / f64::from(servings)).rounded();

        let unresolved: Vec<String> = ingredients
            .iter()
            .filter(|i| !i.is_resolved())
            .map(|i| i.line.clone())
            .collect();

        tracing::debug!(
            lines = ingredients.len(),
            unresolved = unresolved.len(),
            servings,
            calories = per_serving.calories,
            "Calculated recipe nutrition"
        );

        Ok(RecipeNutrition {
            servings,
            ingredients,
            total,
            per_serving,
            unresolved,
        })
    }

    /// Parse, convert and resolve one line
    pub fn analyze_line(&self, line: &str) -> IngredientBreakdown {
        let parsed = parse_ingredient(line);
        let grams = to_grams(parsed.amount, &parsed.unit);
        let unit_category = categorize_unit(&parsed.unit);

        let (matched, match_kind, contribution) = match self.database.resolve(&parsed.name) {
            Some(resolution) => {
                tracing::debug!(
                    name = %parsed.name,
                    key = resolution.key,
                    kind = ?resolution.kind,
                    grams,
                    "Resolved ingredient"
                );
                (
                    Some(resolution.key.to_string()),
                    Some(resolution.kind),
                    resolution.profile.for_grams(grams),
                )
            }
            None => {
                tracing::debug!(name = %parsed.name, "No reference profile; contributing zero");
                (None, None, NutrientTotals::zero())
            }
        };

        IngredientBreakdown {
            line: line.to_string(),
            parsed,
            grams,
            unit_category,
            matched,
            match_kind,
            contribution,
        }
    }
}

/// Servings must be a positive integer that fits the divisor
pub fn validate_servings(servings: i64) -> NutritionResult<u32> {
    u32::try_from(servings)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(NutritionError::InvalidServings(servings))
}

/// Per-serving nutrition using the built-in reference dataset
pub fn calculate_nutrition<I, S>(lines: I, servings: i64) -> NutritionResult<NutrientTotals>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NutritionCalculator::default().calculate(lines, servings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> NutritionCalculator<'static> {
        NutritionCalculator::default()
    }

    #[test]
    fn test_cup_of_quinoa() {
        let totals = calculate_nutrition(["1 cup quinoa"], 1).unwrap();
        // 240g at 368 kcal/100g
        assert_eq!(totals.calories, 883.0);
        assert_eq!(totals.protein, 34.0); // 14.1 * 2.4 = 33.84
        assert_eq!(totals.carbs, 154.0); // 64.2 * 2.4 = 154.08
        assert_eq!(totals.fiber, 17.0); // 7.0 * 2.4 = 16.8
        assert_eq!(totals.potassium, 1351.0); // 563 * 2.4 = 1351.2
        assert!((totals.iron - 11.0).abs() < 1e-9); // 4.6 * 2.4 = 11.04
    }

    #[test]
    fn test_tablespoons_of_olive_oil() {
        let totals = calculate_nutrition(["2 tbsp olive oil"], 1).unwrap();
        // 30g at 884 kcal/100g
        assert_eq!(totals.calories, 265.0);
        assert_eq!(totals.fat, 30.0);
        assert!((totals.iron - 0.2).abs() < 1e-9); // 0.6 * 0.3 = 0.18
    }

    #[test]
    fn test_ounces_of_chicken_breast() {
        let result = calc().explain(["8oz chicken breast"], 1).unwrap();
        assert!((result.ingredients[0].grams - 226.8).abs() < 0.001);
        assert_eq!(result.per_serving.calories, 374.0);
        assert_eq!(result.per_serving.protein, 70.0); // 31.0 * 2.268 = 70.308
        assert!((result.per_serving.iron - 2.3).abs() < 1e-9); // 1.0 * 2.268
    }

    #[test]
    fn test_unresolved_ingredient_contributes_zero() {
        let result = calc().explain(["3 cups unicorn dust"], 1).unwrap();
        assert_eq!(result.per_serving, NutrientTotals::zero());
        assert_eq!(result.unresolved, vec!["3 cups unicorn dust".to_string()]);
        assert!(result.ingredients[0].match_kind.is_none());
    }

    #[test]
    fn test_substring_match_in_breakdown() {
        let result = calc().explain(["grilled chicken breast strips"], 1).unwrap();
        let line = &result.ingredients[0];
        assert_eq!(line.matched.as_deref(), Some("chicken breast"));
        assert_eq!(line.match_kind, Some(MatchKind::Substring));
        // no leading number: 100g fallback
        assert_eq!(line.grams, 100.0);
        assert_eq!(result.per_serving.calories, 165.0);
    }

    #[test]
    fn test_mixed_recipe_sums_contributions() {
        let totals = calculate_nutrition(
            ["1 cup quinoa", "2 tbsp olive oil", "3 cups unicorn dust"],
            1,
        )
        .unwrap();
        // 883.2 + 265.2
        assert_eq!(totals.calories, 1148.0);
    }

    #[test]
    fn test_order_independent() {
        let lines = [
            "1 cup quinoa",
            "2 tbsp olive oil",
            "8oz chicken breast",
            "1 tsp garlic",
            "3 cups unicorn dust",
            "2 eggs",
            "0.5 lb spinach",
        ];
        let forward = calc().explain(lines, 3).unwrap();
        let mut reversed_lines = lines.to_vec();
        reversed_lines.reverse();
        let reversed = calc().explain(reversed_lines, 3).unwrap();
        let mut rotated_lines = lines.to_vec();
        rotated_lines.rotate_left(3);
        let rotated = calc().explain(rotated_lines, 3).unwrap();

        assert_eq!(forward.total, reversed.total);
        assert_eq!(forward.total, rotated.total);
        assert_eq!(forward.per_serving, reversed.per_serving);
        assert_eq!(forward.per_serving, rotated.per_serving);
    }

    #[test]
    fn test_pure_and_repeatable() {
        let lines = ["1 cup brown rice", "200g salmon", "1 avocado"];
        let first = calculate_nutrition(lines, 2).unwrap();
        let second = calculate_nutrition(lines, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_doubling_servings_halves_totals() {
        let lines = ["1 kg oats", "4 cup milk", "100g honey"];
        let one = calc().explain(lines, 1).unwrap();
        let two = calc().explain(lines, 2).unwrap();
        // Recipe totals are identical; per-serving values halve before rounding
        assert_eq!(one.total, two.total);
        let half = one.total.scale(0.5).rounded();
        assert_eq!(two.per_serving, half);
        assert!((two.per_serving.calories * 2.0 - one.per_serving.calories).abs() <= 1.0);
    }

    #[test]
    fn test_rounding_policy_on_any_input() {
        let lines = ["1.3 cup quinoa", "7 tsp olive oil", "3.7oz salmon", "1 piece banana"];
        for servings in 1..=7 {
            let totals = calculate_nutrition(lines, servings).unwrap();
            for (field, value) in totals.fields() {
                if field == "iron" {
                    let tenths = value * 10.0;
                    assert!((tenths - tenths.round()).abs() < 1e-6, "iron {}", value);
                } else {
                    assert_eq!(value, value.round(), "{} {}", field, value);
                }
            }
        }
    }

    #[test]
    fn test_huge_amounts_stay_finite() {
        let huge = format!("1{} cup quinoa", "0".repeat(307));
        let overflowing = format!("1{} g olive oil", "0".repeat(400));
        let lines = [huge.as_str(), huge.as_str(), overflowing.as_str(), "2 tbsp olive oil"];

        let result = calc().explain(lines, 3).unwrap();
        assert_eq!(result.ingredients[0].grams, f64::MAX);
        // a number past f64 range parses as infinity and counts as no mass
        assert_eq!(result.ingredients[2].grams, 0.0);

        for totals in [result.total, result.per_serving] {
            for (field, value) in totals.fields() {
                assert!(value.is_finite() && value >= 0.0, "{} {}", field, value);
            }
        }
        let json = serde_json::to_value(result.per_serving).unwrap();
        assert!(json["sugar"].is_number());
        assert!(json["calories"].is_number());
    }

    #[test]
    fn test_invalid_servings_rejected() {
        for bad in [0, -1, -12, i64::from(u32::MAX) + 1] {
            let err = calculate_nutrition(["1 cup quinoa"], bad).unwrap_err();
            assert!(matches!(err, NutritionError::InvalidServings(s) if s == bad));
        }
    }

    #[test]
    fn test_empty_ingredient_list() {
        let result = calc().explain(Vec::<String>::new(), DEFAULT_SERVINGS).unwrap();
        assert_eq!(result.per_serving, NutrientTotals::zero());
        assert!(result.ingredients.is_empty());
    }

    #[test]
    fn test_blank_line_contributes_zero() {
        let result = calc().explain(["   "], 1).unwrap();
        assert_eq!(result.per_serving, NutrientTotals::zero());
        assert_eq!(result.unresolved.len(), 1);
    }

    #[test]
    fn test_custom_database() {
        let json = r#"{"version": "test", "ingredients": [
            {"name": "widget", "calories": 50, "protein": 1, "carbs": 2, "fat": 3, "fiber": 0,
             "sugar": 0, "sodium": 10, "vitaminC": 0, "vitaminD": 0, "calcium": 0, "iron": 0.25, "potassium": 0}
        ]}"#;
        let db = NutrientDatabase::from_json(json).unwrap();
        let totals = NutritionCalculator::new(&db)
            .calculate(["2 piece widget", "1 cup quinoa"], 2)
            .unwrap();
        // 200g of widget over 2 servings; quinoa is not in this dataset
        assert_eq!(totals.calories, 50.0);
        assert_eq!(totals.sodium, 10.0);
        assert!((totals.iron - 0.3).abs() < 1e-9); // 0.25 rounds half up
    }
}
