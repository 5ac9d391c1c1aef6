//! Command-line arguments and interactive input parsing

use std::path::PathBuf;

use application::QUICK_CITIES;
use clap::{Parser, Subcommand};
use domain::UnitMode;

/// Skycast - current weather and five-day forecast in the terminal
#[derive(Debug, Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Current weather and 5-day forecast for any city", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./skycast.toml if present)
    #[arg(short, long, global = true, env = "SKYCAST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up one city and print the result
    ///
    /// Example: skycast lookup "New York" --units imperial
    Lookup {
        /// City name
        city: String,

        /// Unit system (metric or imperial); defaults to the configured one
        #[arg(short, long)]
        units: Option<UnitMode>,

        /// Print the display model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session with a live clock
    Interactive {
        /// Unit system to start in
        #[arg(short, long)]
        units: Option<UnitMode>,
    },

    /// List the quick-search cities
    Cities,

    /// Show the resolved configuration (API key redacted)
    Config,
}

/// Determine log filter level from verbosity count
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Search for the given text
    Search(String),
    ToggleUnits,
    ToggleTheme,
    Help,
    Quit,
    /// Unrecognised `:` command
    Unknown(String),
}

impl Input {
    /// Interpret a line typed in the interactive session
    ///
    /// A bare number `1`-`8` picks a quick city; everything not starting
    /// with `:` is a search, including an empty line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if let Some(command) = trimmed.strip_prefix(':') {
            return match command.trim().to_lowercase().as_str() {
                "u" | "units" => Self::ToggleUnits,
                "t" | "theme" => Self::ToggleTheme,
                "h" | "help" | "?" => Self::Help,
                "q" | "quit" | "exit" => Self::Quit,
                other => Self::Unknown(other.to_string()),
            };
        }

        if let Ok(n) = trimmed.parse::<usize>() {
            if let Some(city) = n.checked_sub(1).and_then(|i| QUICK_CITIES.get(i)) {
                return Self::Search((*city).to_string());
            }
        }

        Self::Search(line.to_string())
    }
}
