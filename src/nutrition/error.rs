//! Nutrition engine error types

use thiserror::Error;

/// Errors surfaced by the nutrition engine
///
/// Malformed lines, unknown units and unresolved names never produce an error;
/// they degrade through fallbacks instead.
#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("servings must be a positive integer, got {0}")]
    InvalidServings(i64),

    #[error("Invalid reference dataset: {0}")]
    Dataset(String),

    #[error("Failed to read reference dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reference dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for nutrition operations
pub type NutritionResult<T> = Result<T, NutritionError>;
