//! Display conversion of provider measurements
//!
//! Temperatures and wind speeds arrive from the provider in the unit system
//! the request was made with. When that system matches the display mode the
//! conversion is display-only (rounding, km/h for metric wind). When the user
//! has toggled units since the fetch, values are converted across systems
//! first, so a toggle never needs a new request.
//!
//! # Examples
//!
//! ```
//! use domain::{Measurement, UnitMode, convert};
//!
//! let wind = Measurement::wind_speed(5.0, UnitMode::Metric);
//! assert_eq!(convert(wind, UnitMode::Metric).to_string(), "18 km/h");
//!
//! let visibility = Measurement::distance(9_720.0);
//! assert_eq!(convert(visibility, UnitMode::Imperial).to_string(), "9.7 km");
//! ```

use std::fmt;

use serde::Serialize;

use crate::value_objects::{Measurement, Quantity, UnitMode};

/// Metres per second to kilometres per hour
pub const MPS_TO_KMH: f64 = 3.6;
/// Metres per second to miles per hour
pub const MPS_TO_MPH: f64 = 2.236_936;
/// Miles per hour to kilometres per hour
pub const MPH_TO_KMH: f64 = 1.609_344;

/// A display-ready number
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayValue {
    /// Rounded to the nearest integer
    Whole(i64),
    /// Rounded to one decimal place
    Tenths(f64),
    /// Shown exactly as received
    Raw(f64),
}

impl DisplayValue {
    /// Numeric value, mainly for comparisons in callers and tests
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Whole(v) => v as f64,
            Self::Tenths(v) | Self::Raw(v) => v,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(v) => write!(f, "{v}"),
            Self::Tenths(v) => write!(f, "{v:.1}"),
            Self::Raw(v) => write!(f, "{v}"),
        }
    }
}

/// A converted value together with its unit label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvertedMeasurement {
    pub value: DisplayValue,
    pub unit: &'static str,
}

impl fmt::Display for ConvertedMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Degree and percent signs attach directly to the number.
        if self.unit.starts_with('°') || self.unit == "%" {
            write!(f, "{}{}", self.value, self.unit)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Convert a measurement for display in `mode`
#[must_use]
pub fn convert(measurement: Measurement, mode: UnitMode) -> ConvertedMeasurement {
    let Measurement {
        value,
        quantity,
        system,
    } = measurement;

    match quantity {
        Quantity::Temperature => ConvertedMeasurement {
            value: DisplayValue::Whole(round_whole(temperature_in(value, system, mode))),
            unit: mode.temperature_symbol(),
        },
        Quantity::WindSpeed => ConvertedMeasurement {
            value: DisplayValue::Whole(round_whole(wind_speed_in(value, system, mode))),
            unit: mode.speed_unit(),
        },
        Quantity::Pressure => ConvertedMeasurement {
            value: DisplayValue::Raw(value),
            unit: "hPa",
        },
        Quantity::Percentage => ConvertedMeasurement {
            value: DisplayValue::Raw(value),
            unit: "%",
        },
        Quantity::Distance => ConvertedMeasurement {
            value: DisplayValue::Tenths(round_tenths(value / 1000.0)),
            unit: "km",
        },
    }
}

/// Temperature expressed in the display system, unrounded
#[must_use]
pub fn temperature_in(value: f64, from: UnitMode, to: UnitMode) -> f64 {
    match (from, to) {
        (UnitMode::Metric, UnitMode::Imperial) => value.mul_add(9.0 / 5.0, 32.0),
        (UnitMode::Imperial, UnitMode::Metric) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    }
}

/// Wind speed in the display unit (km/h or mph), unrounded
///
/// Metric provider values are metres per second; imperial ones are mph.
#[must_use]
pub fn wind_speed_in(value: f64, from: UnitMode, to: UnitMode) -> f64 {
    match (from, to) {
        (UnitMode::Metric, UnitMode::Metric) => value * MPS_TO_KMH,
        (UnitMode::Metric, UnitMode::Imperial) => value * MPS_TO_MPH,
        (UnitMode::Imperial, UnitMode::Metric) => value * MPH_TO_KMH,
        (UnitMode::Imperial, UnitMode::Imperial) => value,
    }
}

/// Round to the nearest integer, halves towards positive infinity
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_whole(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i64
}

/// Round to one decimal place
#[must_use]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
