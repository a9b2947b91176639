//! Cart CLI - drive the cart engine from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List the configured catalog
//! cart-cli catalog
//!
//! # Add a product, set its quantity, and check out
//! cart-cli run add:1 set:1=3 total checkout
//!
//! # Start with every product listed at quantity zero
//! cart-cli run --mode prepopulated inc:2 inc:2 dec:2 checkout
//!
//! # Emit the final state as JSON
//! cart-cli run --json --catalog catalog.yaml add:10 set:10=2
//! ```
//!
//! # Commands
//!
//! - `catalog` - List catalog entries
//! - `run` - Replay cart actions against a fresh engine
//!
//! # Environment Variables
//!
//! - `CART_INIT_MODE`, `CART_CATALOG_PATH`, `CART_CURRENCY` - engine defaults
//! - `CART_LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `RUST_LOG` - log filter (default: info)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use cart_engine_core::{ConfigOverrides, CurrencyCode, EngineConfig, InitMode};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod render;

use commands::run::Action;
use error::CliError;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(author, version, about = "Product selection cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries
    Catalog {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the catalog as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Replay cart actions against a fresh engine
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// How the cart starts (`empty`, `prepopulated`)
        #[arg(short, long)]
        mode: Option<InitMode>,

        /// Print the final state as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Actions: `add:<id>`, `set:<id>=<qty>`, `inc:<id>`, `dec:<id>`, `total`, `checkout`
        #[arg(required = true)]
        actions: Vec<Action>,
    },
}

/// Overrides for where the catalog comes from and how prices display.
#[derive(Args)]
struct SourceArgs {
    /// YAML catalog file
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Display currency (USD, EUR, GBP, CAD, AUD)
    #[arg(long)]
    currency: Option<CurrencyCode>,
}

impl SourceArgs {
    /// Flags win over the environment; the matching variables are not read.
    fn overrides(self, mode: Option<InitMode>) -> ConfigOverrides {
        ConfigOverrides {
            init_mode: mode,
            catalog_path: self.catalog,
            currency: self.currency,
        }
    }

    fn resolve(self, mode: Option<InitMode>) -> Result<EngineConfig, CliError> {
        Ok(EngineConfig::from_env_with(&self.overrides(mode))?)
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let json = std::env::var("CART_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    // Load .env before the log format is read
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Catalog { source, json } => {
            let config = source.resolve(None)?;
            if json {
                commands::catalog::print_json(&config)?;
            } else {
                commands::catalog::list(&config);
            }
        }
        Commands::Run {
            source,
            mode,
            json,
            actions,
        } => {
            let config = source.resolve(mode)?;
            let report = commands::run::replay(config, &actions);
            if json {
                commands::run::print_json(&report)?;
            } else {
                commands::run::log_report(&report);
            }
        }
    }
    Ok(())
}
