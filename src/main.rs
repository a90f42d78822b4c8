//! Recipe unit converter CLI
//!
//! Usage:
//!   recipe-units <amount> <from_unit> <to_unit> [ingredient]
//!   recipe-units --units | --aliases | --version
//!
//! Set RECIPE_UNITS_CONFIG to a JSON file of custom units and densities to
//! load them into the registry before converting.

use std::collections::HashMap;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Custom units and densities loaded from the config file
#[derive(Debug, Deserialize)]
struct RegistryConfig {
    #[serde(default)]
    units: Vec<CustomUnit>,
    #[serde(default)]
    densities: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct CustomUnit {
    name: String,
    alias: Option<String>,
    to_ml: Option<f64>,
    to_g: Option<f64>,
}

/// Apply a JSON config file to the shared registry
fn apply_config(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: RegistryConfig = serde_json::from_str(&raw)?;

    for unit in &config.units {
        recipe_units::add_unit(&unit.name, unit.alias.as_deref(), unit.to_ml, unit.to_g);
    }
    for (ingredient, density) in &config.densities {
        recipe_units::set_density(ingredient, *density);
    }

    tracing::info!(
        "loaded {} units and {} densities from {}",
        config.units.len(),
        config.densities.len(),
        path
    );
    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  recipe-units <amount> <from_unit> <to_unit> [ingredient]");
    eprintln!("  recipe-units --units      list supported units");
    eprintln!("  recipe-units --aliases    list unit aliases");
    eprintln!("  recipe-units --version    print build information");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  recipe-units 3 cups milliliters");
    eprintln!("  recipe-units 1 cup grams flour");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so converted values on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("recipe_units=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = std::env::var("RECIPE_UNITS_CONFIG") {
        apply_config(&path)?;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--version") => {
            recipe_units::build_info::print_startup_banner();
        }
        Some("--units") => {
            for unit in recipe_units::supported_units() {
                println!("{}", unit);
            }
        }
        Some("--aliases") => {
            let mut pairs: Vec<(String, String)> =
                recipe_units::unit_aliases().into_iter().collect();
            pairs.sort();
            for (alias, canonical) in pairs {
                println!("{} -> {}", alias, canonical);
            }
        }
        Some(_) if args.len() == 3 || args.len() == 4 => {
            let amount: f64 = args[0]
                .parse()
                .map_err(|_| format!("invalid amount: {}", args[0]))?;
            let ingredient = args.get(3).map(String::as_str);
            let result = recipe_units::convert(amount, &args[1], &args[2], ingredient)?;
            println!("{}", result);
        }
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}
