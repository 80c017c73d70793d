//! Utility to calculate recipe nutrition from the command line
//!
//! Reads one ingredient per line from FILE, or stdin when FILE is omitted,
//! and prints per-serving nutrition as JSON.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nutricalc::nutrition::DEFAULT_SERVINGS;
use nutricalc::{NutrientDatabase, NutritionCalculator};

#[derive(Debug, Parser)]
#[command(
    name = "calculate_recipe",
    version,
    about = "Calculate per-serving nutrition for a recipe's ingredient lines"
)]
struct Args {
    /// Number of servings the recipe makes
    #[arg(short, long, default_value_t = DEFAULT_SERVINGS, allow_negative_numbers = true)]
    servings: i64,

    /// Print the per-ingredient breakdown instead of only the totals
    #[arg(long)]
    explain: bool,

    /// Ingredient list, one per line (defaults to stdin)
    file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutricalc=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let database = match std::env::var("NUTRICALC_DATASET_PATH") {
        Ok(path) if !path.trim().is_empty() => NutrientDatabase::load(&path)?,
        _ => NutrientDatabase::builtin().clone(),
    };
    let calculator = NutritionCalculator::new(&database);

    let json = if args.explain {
        serde_json::to_string_pretty(&calculator.explain(&lines, args.servings)?)?
    } else {
        serde_json::to_string_pretty(&calculator.calculate(&lines, args.servings)?)?
    };
    println!("{}", json);

    Ok(())
}
