//! Data models
//!
//! Records flowing through the nutrition pipeline.

mod ingredient;
mod nutrition;

pub use ingredient::ParsedIngredient;
pub use nutrition::{NutrientProfile, NutrientTotals};
