//! Unit system selection
//!
//! The same selector is sent to the weather provider (`units=metric`) and
//! used to pick display labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Measurement system used for fetching and displaying values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    /// Celsius, metres per second from the provider, km/h on screen
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl UnitMode {
    /// The other unit system
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Query parameter value understood by the weather provider
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature label
    #[must_use]
    pub const fn temperature_symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Wind speed label as displayed
    #[must_use]
    pub const fn speed_unit(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    /// Hint shown on the unit toggle, e.g. `°C → °F`
    #[must_use]
    pub const fn toggle_hint(self) -> &'static str {
        match self {
            Self::Metric => "°C → °F",
            Self::Imperial => "°F → °C",
        }
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for UnitMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Ok(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(Self::Imperial),
            _ => Err(DomainError::InvalidUnitMode(s.to_string())),
        }
    }
}
