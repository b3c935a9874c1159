//! Command-line interface for fakegen
//!
//! # Usage Examples
//!
//! ```bash
//! # List every generator, or only one category
//! fakegen list
//! fakegen list --category number --json
//!
//! # Show a generator's descriptor
//! fakegen info float64range
//!
//! # Generate values
//! fakegen lookup int8
//! fakegen --seed 42 lookup number -p min=1 -p max=6 -n 10
//! fakegen lookup shuffleints -p ints=1,2,3,4 --json
//!
//! # Seed and per-generator defaults from a config file
//! fakegen --config fakegen.yaml lookup number
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use fakegen::cli::{params_from_pairs, parse_param_pair};
use fakegen::{CatalogEntry, Faker, FakerConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fakegen")]
#[command(about = "Generate random values by generator name")]
#[command(long_about = None)]
struct Cli {
    /// YAML configuration file (seed and per-generator parameter defaults)
    #[arg(long, global = true, env = "FAKEGEN_CONFIG")]
    config: Option<PathBuf>,

    /// RNG seed for reproducible output (overrides the config seed)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered generators
    List {
        /// Only list generators in this category
        #[arg(long)]
        category: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the descriptor of one generator as JSON
    Info {
        /// Generator name
        name: String,
    },

    /// Generate values from one generator
    Lookup {
        /// Generator name
        name: String,

        /// Generator parameter (repeatable, e.g. -p min=1 -p max=6)
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param_pair)]
        params: Vec<(String, String)>,

        /// Number of values to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print each value as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing on stderr so stdout only carries values
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FakerConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => FakerConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut faker = Faker::from_config(&config).context("Failed to initialize generators")?;

    match cli.command {
        Commands::List { category, json } => {
            let registry = faker.registry();
            let entries: Vec<CatalogEntry<'_>> = registry
                .catalog()
                .into_iter()
                .filter(|entry| match category.as_deref() {
                    Some(c) => entry.info.category() == c,
                    None => true,
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!(
                        "{:<14} {:<8} {}",
                        entry.name,
                        entry.info.category(),
                        entry.info.description()
                    );
                }
            }
        }
        Commands::Info { name } => {
            let registry = faker.registry();
            let info = registry
                .lookup(&name)
                .with_context(|| format!("Unknown generator: {name}"))?;
            let entry = CatalogEntry { name: &name, info };
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::Lookup {
            name,
            params,
            count,
            json,
        } => {
            let params = params_from_pairs(&params);
            tracing::debug!(generator = %name, count, "Generating values");

            for _ in 0..count {
                let value = faker
                    .lookup(&name, &params)
                    .with_context(|| format!("Generator '{name}' failed"))?;
                if json {
                    println!("{}", serde_json::to_string(&value)?);
                } else {
                    println!("{value}");
                }
            }
        }
    }

    Ok(())
}
