//! Build and dataset information
//!
//! Compile-time metadata paired with the reference dataset the binary
//! serves, for the startup banner and the status tool.

use serde::Serialize;

use crate::nutrition::NutrientDatabase;

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("NUTRICALC_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Cargo profile the binary was built with ("debug" or "release")
pub const BUILD_PROFILE: &str = match option_env!("NUTRICALC_BUILD_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub dataset_version: String,
    pub reference_ingredients: usize,
    pub category_rules: usize,
}

impl BuildInfo {
    /// Build information for a binary serving `db`
    pub fn for_dataset(db: &NutrientDatabase) -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_profile: BUILD_PROFILE,
            build_timestamp: BUILD_TIMESTAMP,
            dataset_version: db.version().to_string(),
            reference_ingredients: db.len(),
            category_rules: db.categories().len(),
        }
    }

    /// Build information for the embedded reference dataset
    pub fn current() -> Self {
        Self::for_dataset(NutrientDatabase::builtin())
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner(info: &BuildInfo, dataset_source: &str) {
    eprintln!("===============================================");
    eprintln!("  nutricalc - Recipe Nutrition Calculator");
    eprintln!("  Version: {} ({})", info.version, info.build_profile);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!(
        "  Dataset: {} v{} | {} ingredients, {} category rules",
        dataset_source, info.dataset_version, info.reference_ingredients, info.category_rules
    );
    eprintln!("===============================================");
}
