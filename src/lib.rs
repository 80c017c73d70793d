//! nutricalc - Recipe Nutrition Calculator
//!
//! Converts free-text ingredient lists into per-serving nutrition facts.

pub mod build_info;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use models::{NutrientProfile, NutrientTotals, ParsedIngredient};
pub use nutrition::{calculate_nutrition, NutrientDatabase, NutritionCalculator, NutritionError};
