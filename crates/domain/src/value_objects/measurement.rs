//! Physical measurements as delivered by the weather provider

use serde::{Deserialize, Serialize};

use super::UnitMode;

/// Physical quantity a raw number represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// °C or °F depending on the fetch mode
    Temperature,
    /// m/s (metric fetch) or mph (imperial fetch)
    WindSpeed,
    /// Always hPa
    Pressure,
    /// Always percent (humidity, cloudiness)
    Percentage,
    /// Always metres
    Distance,
}

/// A raw provider value tagged with its quantity and the unit system it was
/// fetched in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub quantity: Quantity,
    pub system: UnitMode,
}

impl Measurement {
    #[must_use]
    pub const fn new(value: f64, quantity: Quantity, system: UnitMode) -> Self {
        Self {
            value,
            quantity,
            system,
        }
    }

    #[must_use]
    pub const fn temperature(value: f64, system: UnitMode) -> Self {
        Self::new(value, Quantity::Temperature, system)
    }

    #[must_use]
    pub const fn wind_speed(value: f64, system: UnitMode) -> Self {
        Self::new(value, Quantity::WindSpeed, system)
    }

    #[must_use]
    pub const fn pressure(hectopascals: f64) -> Self {
        Self::new(hectopascals, Quantity::Pressure, UnitMode::Metric)
    }

    #[must_use]
    pub const fn percentage(percent: f64) -> Self {
        Self::new(percent, Quantity::Percentage, UnitMode::Metric)
    }

    #[must_use]
    pub const fn distance(metres: f64) -> Self {
        Self::new(metres, Quantity::Distance, UnitMode::Metric)
    }
}
