//! Parsed ingredient line

use serde::{Deserialize, Serialize};

/// Structured decomposition of a free-text ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Quantity in `unit`
    pub amount: f64,
    /// Lowercase unit token ("piece" when the line carried none)
    pub unit: String,
    /// Lowercase ingredient name
    pub name: String,
}

impl ParsedIngredient {
    pub fn new(amount: f64, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
            name: name.into(),
        }
    }
}
