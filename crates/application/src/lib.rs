//! Application layer - Use cases and orchestration
//!
//! Contains the weather lookup use case, the interactive session that drives
//! the domain state machine, the display model, and port definitions.

pub mod error;
pub mod ports;
pub mod presenter;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use presenter::{ForecastCard, QUICK_CITIES, ReportView, Stat, ViewBody, WeatherView};
pub use services::*;
