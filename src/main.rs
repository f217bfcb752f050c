use anyhow::{Context, Result};
use chrono::Month;
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use travelatlas::atlas::{CategoryKey, ClimateAtlas, destinations};
use travelatlas::data::{load_feature_collection, load_travel_records};
use travelatlas::models::{MONTHS, TravelRecord, parse_month};
use travelatlas::{ClimateClassifier, TravelAtlasConfig, TravelAtlasError, logging};

#[derive(Parser, Debug)]
#[command(
    name = "travelatlas",
    version,
    about = "Month-by-month travel climate atlas: which countries to visit, and in what weather"
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Travel-by-month CSV, overrides the configured path
    #[arg(long, global = true)]
    travel: Option<PathBuf>,

    /// Countries GeoJSON, overrides the configured path
    #[arg(long, global = true)]
    countries: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Highlighted countries of a month with climate variant and label position
    Month {
        #[arg(value_parser = month_arg)]
        month: Month,
    },
    /// Climate variant of one country in one month
    Variant {
        #[arg(value_parser = month_arg)]
        month: Month,
        country: String,
    },
    /// Climate type and trip category of a category label
    Classify { label: String },
    /// How a country name resolves against aliases and the country shapes
    Resolve { name: String },
    /// Destinations of a month, optionally filtered by trip category
    Destinations {
        #[arg(value_parser = month_arg)]
        month: Month,
        /// Trip categories to keep (repeatable); all when omitted
        #[arg(long = "category", value_parser = category_arg)]
        categories: Vec<CategoryKey>,
    },
}

fn month_arg(value: &str) -> std::result::Result<Month, String> {
    parse_month(value).ok_or_else(|| {
        let names: Vec<&str> = MONTHS.iter().map(Month::name).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn category_arg(value: &str) -> std::result::Result<CategoryKey, String> {
    value.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(atlas_err) = err.downcast_ref::<TravelAtlasError>() {
                eprintln!("{}", atlas_err.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TravelAtlasConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;
    debug!("Configuration: {:?}", config);

    match &cli.command {
        Command::Classify { label } => classify(label, cli.json),
        Command::Month { month } => {
            let atlas = load_atlas(&cli, &config, true)?;
            let report = atlas.month_report(*month);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}: {} highlighted countries", report.month, report.countries.len());
                for country in &report.countries {
                    let variant = country.variant.map_or("-", |v| v.as_str());
                    match country.centroid {
                        Some(c) => println!(
                            "  {:<40} {:<14} label at {:.2}, {:.2}",
                            country.display_name, variant, c.latitude, c.longitude
                        ),
                        None => println!("  {:<40} {:<14} no label", country.display_name, variant),
                    }
                }
            }
            Ok(())
        }
        Command::Variant { month, country } => {
            let atlas = load_atlas(&cli, &config, false)?;
            let variant = atlas.variant(*month, country);
            if cli.json {
                println!("{}", serde_json::to_string(&variant)?);
            } else {
                println!("{}", variant.map_or("none", |v| v.as_str()));
            }
            Ok(())
        }
        Command::Resolve { name } => {
            let atlas = load_atlas(&cli, &config, true)?;
            let normalized = travelatlas::atlas::normalize(name);
            let canonical = atlas.aliases().resolve_key(&normalized).to_string();
            let feature = atlas
                .matcher()
                .match_country(name)
                .and_then(|key| atlas.features().get(key))
                .map(|f| f.display_name.clone());
            if cli.json {
                let out = serde_json::json!({
                    "normalized": normalized,
                    "canonical": canonical,
                    "feature": feature,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("normalized: {normalized:?}");
                println!("canonical:  {canonical:?}");
                println!("feature:    {}", feature.as_deref().unwrap_or("(unmatched)"));
            }
            Ok(())
        }
        Command::Destinations { month, categories } => {
            let records = load_records(&cli, &config)?;
            let selected: HashSet<CategoryKey> = if categories.is_empty() {
                CategoryKey::ALL.into_iter().collect()
            } else {
                categories.iter().copied().collect()
            };
            let list = destinations(&records, *month, &selected);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for record in list {
                    println!(
                        "  {:<28} {:<28} {}",
                        record.destination,
                        record.country,
                        CategoryKey::classify(&record.category_raw).label()
                    );
                }
            }
            Ok(())
        }
    }
}

fn classify(label: &str, json: bool) -> Result<()> {
    let climate = ClimateClassifier::default().classify(label);
    let category = CategoryKey::classify(label);
    if json {
        let out = serde_json::json!({ "climate": climate, "category": category });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("climate:  {climate}");
        println!("category: {}", category.label());
    }
    Ok(())
}

fn load_records(cli: &Cli, config: &TravelAtlasConfig) -> Result<Vec<TravelRecord>> {
    let path = cli
        .travel
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.travel_csv));
    load_travel_records(&path)
        .with_context(|| format!("Failed to load travel data from {}", path.display()))
}

fn load_atlas(cli: &Cli, config: &TravelAtlasConfig, with_shapes: bool) -> Result<ClimateAtlas> {
    let records = load_records(cli, config)?;
    let atlas = ClimateAtlas::new(ClimateClassifier::default(), config.alias_table())
        .with_records(&records);
    if !with_shapes {
        return Ok(atlas);
    }

    let path = cli
        .countries
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.countries_geojson));
    let collection = load_feature_collection(&path)
        .with_context(|| format!("Failed to load country shapes from {}", path.display()))?;
    Ok(atlas.with_features(&collection))
}
