//! nutricalc Status Tool
//!
//! Provides runtime status information about the service.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::nutrition::NutrientDatabase;

/// Usage guide returned by nutrition_instructions
pub const NUTRITION_INSTRUCTIONS: &str = r#"
# nutricalc Instructions

nutricalc turns a recipe's ingredient list into nutrition facts per serving.

## Calculating a recipe

Call `calculate_nutrition` with:
- `ingredients`: one string per ingredient line, e.g. `["1 cup quinoa", "2 tbsp olive oil", "8oz chicken breast"]`
- `servings`: how many servings the recipe makes (positive integer, default 1)

The result contains twelve fields per serving: calories, protein, carbs, fat,
fiber, sugar, sodium, vitaminC, vitaminD, calcium, iron, potassium.
Iron is rounded to one decimal place, every other field to a whole number.

Use `explain_nutrition` to see how each line was parsed, how many grams it was
counted as, and which reference food it matched.

## How lines are read

Each line is `<number><unit> <name>`:
- The number must come first (`2`, `1.5`). Fractions like `1/2` are not read.
- One word after the number is the unit. `1 fluid oz milk` reads unit `fluid`.
- A line with no leading number counts as 100g of the whole line.
- A number with no unit counts as pieces: `2 eggs` is 2 pieces.

## Units

| Unit | Grams |
|------|-------|
| cup | 240 |
| tbsp | 15 |
| tsp | 5 |
| oz | 28.35 |
| lb | 453.59 |
| g / gram / grams | 1 |
| kg / kilogram / kilograms | 1000 |
| piece / pieces / item / items | 100 |
| anything else (including plurals like `cups`) | 100 |

## Matching ingredient names

1. Exact name in the reference list (`list_reference_ingredients`).
2. The name contains a reference food, or a reference food contains the name.
   The first reference food in list order wins.
3. Generic words: meat/chicken/beef use chicken breast, vegetable/greens use
   spinach, grain/rice use brown rice.
4. Anything else contributes nothing. This is not an error; check `unresolved`.

Use `lookup_ingredient` to test how a name resolves before calculating.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct NutricalcStatus {
    /// Build information
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Reference dataset information
    pub dataset_source: String,
    pub dataset_version: String,
    pub reference_ingredients: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub calculations_served: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    dataset_source: String,
    calculations: AtomicU64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(dataset_source: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            dataset_source: dataset_source.into(),
            calculations: AtomicU64::new(0),
        }
    }

    /// Count one served calculation
    pub fn record_calculation(&self) {
        self.calculations.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current status
    pub fn get_status(&self, db: &NutrientDatabase) -> NutricalcStatus {
        let build_info = BuildInfo::for_dataset(db);

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutricalcStatus {
            build_profile: build_info.build_profile,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            dataset_source: self.dataset_source.clone(),
            dataset_version: build_info.dataset_version,
            reference_ingredients: build_info.reference_ingredients,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            calculations_served: self.calculations.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_dataset_and_counter() {
        let tracker = StatusTracker::new("builtin");
        tracker.record_calculation();
        tracker.record_calculation();

        let status = tracker.get_status(NutrientDatabase::builtin());
        assert_eq!(status.dataset_source, "builtin");
        assert_eq!(status.dataset_version, "2024.1");
        assert_eq!(status.reference_ingredients, NutrientDatabase::builtin().len());
        assert_eq!(status.calculations_served, 2);
        assert_eq!(status.process_id, std::process::id());
    }
}
