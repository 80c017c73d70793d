//! Ingredient line parsing
//!
//! Splits a free-text line such as "2 tbsp olive oil" or "8oz chicken breast"
//! into amount, unit and name. Only a single token after the number is taken
//! as the unit, so "1 fluid oz milk" yields unit "fluid" and name "oz milk".

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedIngredient;

/// Unit assigned when a number is followed directly by the name
pub const DEFAULT_UNIT: &str = "piece";
/// Amount assigned when a line has no leading number
pub const FALLBACK_AMOUNT: f64 = 100.0;
/// Unit assigned when a line has no leading number
pub const FALLBACK_UNIT: &str = "g";

/// Leading number, optional unit word, then the name.
/// Applied to the trimmed, lowercased line.
static LINE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "1 cup quinoa", "8oz chicken breast", "2 eggs", "1.5 kg flour"
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*([a-z]+)?\s+(.+)$").ok()
});

/// Parse one ingredient line. Never fails.
///
/// Lines without a leading number become 100g of the whole line.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let normalized = line.trim().to_lowercase();

    if let Some(parsed) = match_line(&normalized) {
        return parsed;
    }

    ParsedIngredient::new(FALLBACK_AMOUNT, FALLBACK_UNIT, normalized)
}

fn match_line(normalized: &str) -> Option<ParsedIngredient> {
    let pattern = LINE_PATTERN.as_ref()?;
    let caps = pattern.captures(normalized)?;

    let amount: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str())
        .unwrap_or(DEFAULT_UNIT);
    let name = caps.get(3)?.as_str().trim();

    Some(ParsedIngredient::new(amount, unit, name))
}
