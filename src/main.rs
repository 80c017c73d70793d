//! nutricalc
//!
//! An MCP server computing recipe nutrition from ingredient lines.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutricalc::build_info::{self, BuildInfo};
use nutricalc::mcp::NutricalcService;
use nutricalc::NutrientDatabase;

/// Optional reference dataset override from the environment
fn get_dataset_path() -> Option<PathBuf> {
    std::env::var("NUTRICALC_DATASET_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Load the override dataset if configured, otherwise the built-in one
fn load_database() -> (Arc<NutrientDatabase>, String) {
    if let Some(path) = get_dataset_path() {
        match NutrientDatabase::load(&path) {
            Ok(db) => return (Arc::new(db), path.display().to_string()),
            Err(e) => tracing::warn!(
                "Could not load dataset from {}: {}. Using built-in dataset.",
                path.display(),
                e
            ),
        }
    }
    (Arc::new(NutrientDatabase::builtin().clone()), "builtin".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr to not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutricalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let (database, source) = load_database();

    build_info::print_startup_banner(&BuildInfo::for_dataset(&database), &source);
    eprintln!("Starting MCP server on stdio...");

    let service = NutricalcService::new(database, source);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
