//! Skycast CLI
//!
//! Current weather and five-day forecast for any city, in the terminal.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::sync::Arc;

use anyhow::Context;
use application::QUICK_CITIES;
use clap::Parser;
use infrastructure::{AppConfig, init_telemetry};
use presentation_cli::cli::{Cli, Commands, log_filter_from_verbosity};
use presentation_cli::interactive;
use presentation_cli::render::{Palette, render};
use presentation_cli::setup::{build_session, check_provider};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    // Set up logging based on verbosity
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.telemetry.log_filter = filter.to_string();
    }
    init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Lookup { city, units, json } => {
            let session = build_session(&config, units)?;
            let state = session.submit(&city).await;
            let view = session.view();

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render(&view, &Palette::plain()));
            }

            if let Some(message) = state.error() {
                warn!(%city, message, "Lookup failed");
                std::process::exit(1);
            }
        },

        Commands::Interactive { units } => {
            let session = Arc::new(build_session(&config, units)?);
            info!("Starting interactive session");
            interactive::run(session, interactive::Options::default()).await?;
        },

        Commands::Cities => {
            println!("🌍 Quick-search cities:");
            for (i, city) in QUICK_CITIES.iter().enumerate() {
                println!("  {}. {city}", i + 1);
            }
        },

        Commands::Config => {
            println!("⚙️  Resolved configuration:\n");
            println!("{}", toml::to_string_pretty(&config)?);
            println!(
                "api_key: {}",
                if config.weather.api_key().is_some() {
                    "[REDACTED]"
                } else {
                    "(not set)"
                }
            );
            if let Err(e) = config.validate() {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
            println!("✅ Configuration is valid");

            if check_provider(&config).await? {
                println!("✅ OpenWeatherMap accepted the API key");
            } else {
                eprintln!("❌ OpenWeatherMap is unreachable or rejected the API key");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
