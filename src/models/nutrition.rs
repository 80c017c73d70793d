//! Nutrient vectors
//!
//! `NutrientProfile` is reference content per 100g of one ingredient,
//! `NutrientTotals` is an absolute amount (a recipe total or a per-serving result).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Reference nutrient content per 100g of a canonical ingredient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,   // grams
    pub carbs: f64,     // grams
    pub fat: f64,       // grams
    pub fiber: f64,     // grams
    pub sugar: f64,     // grams
    pub sodium: f64,    // milligrams
    pub vitamin_c: f64, // milligrams
    pub vitamin_d: f64, // micrograms
    pub calcium: f64,   // milligrams
    pub iron: f64,      // milligrams
    pub potassium: f64, // milligrams
}

/// Serialized field names, in declaration order
pub const NUTRIENT_FIELDS: [&str; 12] = [
    "calories", "protein", "carbs", "fat", "fiber", "sugar", "sodium", "vitaminC", "vitaminD",
    "calcium", "iron", "potassium",
];

impl NutrientProfile {
    /// Field values in declaration order, paired with their serialized names
    pub fn fields(&self) -> [(&'static str, f64); 12] {
        NutrientTotals::from(*self).fields()
    }

    /// Absolute nutrient amounts contained in `grams` of this ingredient
    ///
    /// Amounts too large to represent saturate at `f64::MAX`.
    pub fn for_grams(&self, grams: f64) -> NutrientTotals {
        NutrientTotals::from(*self).scale(grams / 100.0).saturated()
    }
}

/// Accumulated nutrient amounts, either a recipe total or a per-serving result
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub vitamin_c: f64,
    pub vitamin_d: f64,
    pub calcium: f64,
    pub iron: f64,
    pub potassium: f64,
}

impl From<NutrientProfile> for NutrientTotals {
    fn from(p: NutrientProfile) -> Self {
        Self {
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fat: p.fat,
            fiber: p.fiber,
            sugar: p.sugar,
            sodium: p.sodium,
            vitamin_c: p.vitamin_c,
            vitamin_d: p.vitamin_d,
            calcium: p.calcium,
            iron: p.iron,
            potassium: p.potassium,
        }
    }
}

/// NaN becomes 0, infinities clamp into `0.0..=f64::MAX`
fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, f64::MAX)
    }
}

/// Round to one decimal place; values too large to scale are already whole
fn round_tenths(value: f64) -> f64 {
    let tenths = value * 10.0;
    if tenths.is_finite() {
        tenths.round() / 10.0
    } else {
        value.round()
    }
}

impl NutrientTotals {
    /// Create totals with every field at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Apply `f` to every field
    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        self.zip_with(self, |a, _| f(a))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            calories: f(self.calories, other.calories),
            protein: f(self.protein, other.protein),
            carbs: f(self.carbs, other.carbs),
            fat: f(self.fat, other.fat),
            fiber: f(self.fiber, other.fiber),
            sugar: f(self.sugar, other.sugar),
            sodium: f(self.sodium, other.sodium),
            vitamin_c: f(self.vitamin_c, other.vitamin_c),
            vitamin_d: f(self.vitamin_d, other.vitamin_d),
            calcium: f(self.calcium, other.calcium),
            iron: f(self.iron, other.iron),
            potassium: f(self.potassium, other.potassium),
        }
    }

    /// Scale every field by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        self.map(|v| v * multiplier)
    }

    /// Add another set of totals to this one
    pub fn add(&self, other: &NutrientTotals) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Clamp every field to a finite, non-negative value
    pub fn saturated(&self) -> Self {
        self.map(saturate)
    }

    /// Round for display: iron to one decimal place, everything else to whole units
    pub fn rounded(&self) -> Self {
        let iron = round_tenths(self.iron);
        Self {
            iron,
            ..self.map(f64::round)
        }
    }

    pub fn fields(&self) -> [(&'static str, f64); 12] {
        let values = [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.sugar,
            self.sodium,
            self.vitamin_c,
            self.vitamin_d,
            self.calcium,
            self.iron,
            self.potassium,
        ];
        std::array::from_fn(|i| (NUTRIENT_FIELDS[i], values[i]))
    }

    /// Total order over every field, used to sum contributions in a canonical sequence
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.fields()
            .iter()
            .zip(other.fields().iter())
            .map(|((_, a), (_, b))| a.total_cmp(b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl std::ops::Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientTotals {
    type Output = NutrientTotals;

    fn mul(self, multiplier: f64) -> NutrientTotals {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), |acc, n| acc + n)
    }
}
