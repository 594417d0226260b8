use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use pantry_chef::{
    merge, parse, scale, score, serving_range, Catalog, Detection,
    DetectionPostProcessor, EngineConfig, PantryItem, Recommendation,
};

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Load environment variables from .env file before reading RUST_LOG
    dotenv::dotenv().ok();
    env_logger::init();

    let args = cli::parse_args();
    let catalog = load_catalog(&args)?;
    let config = load_config(&args)?;

    match args.command {
        Command::Parse { text } => {
            for item in parse(&text) {
                println!("{}", item);
            }
        }
        Command::Recommend {
            items,
            detections,
            servings,
            limit,
            json,
        } => {
            let manual = items.as_deref().map(parse).unwrap_or_default();
            let detected = match detections {
                Some(path) => detect_items(&path, &config)?,
                None => Vec::new(),
            };
            let pantry = merge(&[manual, detected]);
            info!("Pantry has {} items", pantry.len());

            let mut ranked = score(catalog.recipes(), &pantry);
            if let Some(limit) = limit {
                ranked.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print_pantry(&pantry);
                for (rank, recommendation) in ranked.iter().enumerate() {
                    print_recommendation(rank + 1, recommendation, servings)?;
                }
            }
        }
        Command::Scale {
            recipe_id,
            servings,
        } => {
            let recipe = catalog
                .get(&recipe_id)
                .with_context(|| format!("Recipe '{}' not found in catalog", recipe_id))?;
            let range = serving_range(recipe);
            if !range.contains(&servings) {
                info!(
                    "{} servings is outside the suggested range {}-{}",
                    servings,
                    range.start(),
                    range.end()
                );
            }
            println!("{} for {} servings:", recipe.name, servings);
            for ingredient in scale(recipe, servings)? {
                println!("  • {}", ingredient);
            }
        }
    }

    Ok(())
}

fn load_catalog(args: &Cli) -> Result<Catalog> {
    match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load recipe catalog '{}'", path.display())),
        None => Catalog::builtin().context("Failed to load the bundled recipe catalog"),
    }
}

fn load_config(args: &Cli) -> Result<EngineConfig> {
    match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load configuration '{}'", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn detect_items(path: &Path, config: &EngineConfig) -> Result<Vec<PantryItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read detections file '{}'", path.display()))?;
    let detections: Vec<Detection> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid detections in '{}'", path.display()))?;

    // Status goes to stderr so `--json` output stays machine-readable
    let outcome = DetectionPostProcessor::with_config(config.detection.clone()).process(&detections);
    if outcome.is_empty() {
        eprintln!("No confident detection in {}", path.display());
    } else {
        eprintln!(
            "Detected {} items ({:.0}% confidence)",
            outcome.items.len(),
            outcome.aggregate_confidence * 100.0
        );
    }
    Ok(outcome.items)
}

fn print_pantry(pantry: &[PantryItem]) {
    println!("Pantry ({} items):", pantry.len());
    for item in pantry {
        println!("  • {}", item);
    }
    println!();
}

fn print_recommendation(rank: usize, recommendation: &Recommendation<'_>, servings: Option<u32>) -> Result<()> {
    println!("{}. {}", rank, recommendation);
    if !recommendation.missing_ingredients.is_empty() {
        println!("   missing: {}", recommendation.missing_ingredients.join(", "));
    }

    if let Some(servings) = servings {
        for ingredient in scale(recommendation.recipe, servings)? {
            println!("   - {}", ingredient);
        }
    }
    Ok(())
}
