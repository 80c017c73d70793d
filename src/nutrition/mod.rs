//! Nutrition calculation module
//!
//! Parses ingredient lines, converts units to grams, resolves reference
//! profiles and aggregates per-serving totals.

pub mod calculator;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod units;

pub use calculator::{
    calculate_nutrition, validate_servings, IngredientBreakdown, NutritionCalculator,
    RecipeNutrition, DEFAULT_SERVINGS,
};
pub use error::{NutritionError, NutritionResult};
pub use parser::parse_ingredient;
pub use resolver::{CategoryRule, MatchKind, NutrientDatabase, ReferenceFood, Resolution};
pub use units::{categorize_unit, grams_per_unit, to_grams, UnitCategory};
