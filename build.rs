//! Build script for nutricalc
//!
//! Embeds the compile time and cargo profile, and rebuilds when the
//! reference dataset changes.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/data/reference_foods.json");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=NUTRICALC_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=NUTRICALC_BUILD_PROFILE={}", profile);
}
