//! Unit types and conversion constants
//!
//! Every (amount, unit) pair converts to grams. Volume units use a fixed
//! density-agnostic factor, and discrete or unknown units assume 100g each.

use serde::Serialize;

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Kitchen volume units (cup, tbsp, tsp) with a fixed gram factor
    Volume,
    /// Mass units (g, kg, oz, lb)
    Weight,
    /// Discrete count (piece, item)
    Count,
    /// Anything else; treated like a count
    Unknown,
}

// ============================================================================
// Conversion Constants (to grams)
// ============================================================================

pub const G_PER_CUP: f64 = 240.0;
pub const G_PER_TBSP: f64 = 15.0;
pub const G_PER_TSP: f64 = 5.0;
pub const G_PER_OZ: f64 = 28.35;
pub const G_PER_LB: f64 = 453.59;
pub const G_PER_KG: f64 = 1000.0;
/// Assumed mass of one discrete item, also used for unrecognized units
pub const G_PER_PIECE: f64 = 100.0;

// ============================================================================
// Unit Recognition
// ============================================================================

/// Gram factor for kitchen measures. Only these exact tokens are recognized.
fn measure_factor(unit: &str) -> Option<f64> {
    match unit {
        "cup" => Some(G_PER_CUP),
        "tbsp" => Some(G_PER_TBSP),
        "tsp" => Some(G_PER_TSP),
        "oz" => Some(G_PER_OZ),
        "lb" => Some(G_PER_LB),
        _ => None,
    }
}

/// Gram factor for metric mass units
fn mass_factor(unit: &str) -> Option<f64> {
    match unit {
        "g" | "gram" | "grams" => Some(1.0),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        _ => None,
    }
}

fn is_count_unit(unit: &str) -> bool {
    matches!(unit, "piece" | "pieces" | "item" | "items")
}

/// Determine the category of a unit token
pub fn categorize_unit(unit: &str) -> UnitCategory {
    let lower = unit.trim().to_lowercase();

    match lower.as_str() {
        "cup" | "tbsp" | "tsp" => UnitCategory::Volume,
        "oz" | "lb" => UnitCategory::Weight,
        u if mass_factor(u).is_some() => UnitCategory::Weight,
        u if is_count_unit(u) => UnitCategory::Count,
        _ => UnitCategory::Unknown,
    }
}

/// Grams represented by one of `unit`
pub fn grams_per_unit(unit: &str) -> f64 {
    let lower = unit.trim().to_lowercase();

    if let Some(factor) = measure_factor(&lower) {
        return factor;
    }
    if let Some(factor) = mass_factor(&lower) {
        return factor;
    }
    // Count units and anything unrecognized share the per-piece assumption
    G_PER_PIECE
}

/// Convert an amount in the given unit to grams
///
/// Total: every unit converts. Negative or non-finite amounts clamp to 0,
/// and a mass too large to represent saturates at `f64::MAX`.
pub fn to_grams(amount: f64, unit: &str) -> f64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0.0;
    }
    (amount * grams_per_unit(unit)).min(f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_measures() {
        assert_eq!(to_grams(1.0, "cup"), 240.0);
        assert_eq!(to_grams(2.0, "tbsp"), 30.0);
        assert_eq!(to_grams(3.0, "tsp"), 15.0);
        assert!((to_grams(8.0, "oz") - 226.8).abs() < 0.001);
        assert!((to_grams(1.0, "lb") - 453.59).abs() < 0.001);
    }

    #[test]
    fn test_mass_units() {
        assert_eq!(to_grams(250.0, "g"), 250.0);
        assert_eq!(to_grams(1.0, "gram"), 1.0);
        assert_eq!(to_grams(5.0, "grams"), 5.0);
        assert_eq!(to_grams(1.5, "kg"), 1500.0);
        assert_eq!(to_grams(2.0, "kilograms"), 2000.0);
    }

    #[test]
    fn test_count_and_unknown_units_assume_100g() {
        assert_eq!(to_grams(2.0, "piece"), 200.0);
        assert_eq!(to_grams(1.0, "items"), 100.0);
        assert_eq!(to_grams(3.0, "cups"), 300.0);
        assert_eq!(to_grams(1.0, "pinch"), 100.0);
        assert_eq!(to_grams(1.0, ""), 100.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(to_grams(1.0, "CUP"), 240.0);
        assert_eq!(to_grams(1.0, " Kg "), 1000.0);
    }

    #[test]
    fn test_always_finite_and_non_negative() {
        let units = ["cup", "tbsp", "tsp", "oz", "lb", "g", "kg", "piece", "dash", "fluid"];
        let amounts = [
            0.0,
            0.25,
            1.0,
            3.5,
            1000.0,
            1e307,
            f64::MAX,
            -2.0,
            f64::NAN,
            f64::INFINITY,
        ];
        for unit in units {
            for amount in amounts {
                let grams = to_grams(amount, unit);
                assert!(grams.is_finite(), "{} {} -> {}", amount, unit, grams);
                assert!(grams >= 0.0, "{} {} -> {}", amount, unit, grams);
            }
        }
    }

    #[test]
    fn test_huge_amounts_saturate() {
        assert_eq!(to_grams(1e307, "cup"), f64::MAX);
        assert_eq!(to_grams(f64::MAX, "lb"), f64::MAX);
        assert_eq!(to_grams(f64::MAX, "g"), f64::MAX);
    }

    #[test]
    fn test_categorize_unit() {
        assert_eq!(categorize_unit("cup"), UnitCategory::Volume);
        assert_eq!(categorize_unit("tsp"), UnitCategory::Volume);
        assert_eq!(categorize_unit("oz"), UnitCategory::Weight);
        assert_eq!(categorize_unit("kilogram"), UnitCategory::Weight);
        assert_eq!(categorize_unit("pieces"), UnitCategory::Count);
        assert_eq!(categorize_unit("cups"), UnitCategory::Unknown);
        assert_eq!(categorize_unit("large"), UnitCategory::Unknown);
    }
}
