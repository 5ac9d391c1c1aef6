//! Weather report entities
//!
//! Values are stored exactly as the provider returned them, in the unit
//! system the request was made with. Display conversion happens on read.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Measurement, UnitMode};

/// Base URL for provider condition icons
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Sky condition reported alongside a reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkyCondition {
    /// Provider condition id (e.g. 800 for clear sky)
    pub code: u16,
    /// Condition group, e.g. "Clouds"
    pub main: String,
    /// Human-readable description, e.g. "broken clouds"
    pub description: String,
    /// Provider icon id, e.g. "04d"
    pub icon: String,
}

impl SkyCondition {
    /// Large icon URL for this condition
    ///
    /// ```
    /// use domain::SkyCondition;
    ///
    /// let sky = SkyCondition {
    ///     code: 800,
    ///     main: "Clear".into(),
    ///     description: "clear sky".into(),
    ///     icon: "01d".into(),
    /// };
    /// assert_eq!(sky.icon_url(), "https://openweathermap.org/img/wn/01d@4x.png");
    /// ```
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@4x.png", self.icon)
    }
}

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved city name as returned by the provider
    pub city: String,
    /// ISO country code, when known
    pub country: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Pressure in hPa
    pub pressure: f64,
    /// m/s for metric fetches, mph for imperial
    pub wind_speed: f64,
    /// Visibility in metres
    pub visibility: Option<f64>,
    /// Cloudiness in percent
    pub cloudiness: f64,
    pub condition: SkyCondition,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub observed_at: DateTime<Utc>,
    /// Shift from UTC in seconds for the city
    pub utc_offset_seconds: i32,
    /// Unit system the values above are expressed in
    pub units: UnitMode,
}

impl CurrentConditions {
    #[must_use]
    pub const fn temperature_measurement(&self) -> Measurement {
        Measurement::temperature(self.temperature, self.units)
    }

    #[must_use]
    pub const fn feels_like_measurement(&self) -> Measurement {
        Measurement::temperature(self.feels_like, self.units)
    }

    #[must_use]
    pub const fn min_measurement(&self) -> Measurement {
        Measurement::temperature(self.temperature_min, self.units)
    }

    #[must_use]
    pub const fn max_measurement(&self) -> Measurement {
        Measurement::temperature(self.temperature_max, self.units)
    }

    #[must_use]
    pub const fn wind_measurement(&self) -> Measurement {
        Measurement::wind_speed(self.wind_speed, self.units)
    }

    #[must_use]
    pub const fn humidity_measurement(&self) -> Measurement {
        Measurement::percentage(self.humidity)
    }

    #[must_use]
    pub const fn cloudiness_measurement(&self) -> Measurement {
        Measurement::percentage(self.cloudiness)
    }

    #[must_use]
    pub const fn pressure_measurement(&self) -> Measurement {
        Measurement::pressure(self.pressure)
    }

    #[must_use]
    pub fn visibility_measurement(&self) -> Option<Measurement> {
        self.visibility.map(Measurement::distance)
    }

    /// The city's fixed UTC offset, falling back to UTC if out of range
    #[must_use]
    pub fn local_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }

    /// Display location, e.g. "London, GB"
    #[must_use]
    pub fn location_label(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {country}", self.city),
            _ => self.city.clone(),
        }
    }
}

/// One entry of the 3-hourly forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub condition: SkyCondition,
    /// Unit system the temperatures are expressed in
    pub units: UnitMode,
}

impl ForecastSample {
    #[must_use]
    pub const fn temperature_measurement(&self) -> Measurement {
        Measurement::temperature(self.temperature, self.units)
    }
}

/// Everything fetched for one successful search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    /// Forecast series in chronological order
    pub forecast: Vec<ForecastSample>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Unit system the report was fetched in
    #[must_use]
    pub const fn units(&self) -> UnitMode {
        self.current.units
    }
}
