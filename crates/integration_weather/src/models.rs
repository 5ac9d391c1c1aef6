//! Weather data models
//!
//! Public types returned by the client, plus the raw response shapes of the
//! OpenWeatherMap API. Raw fields the client depends on are optional so that
//! a malformed body is reported as a parse error instead of a panic further
//! down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sky condition as reported by OpenWeatherMap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition id (2xx thunderstorm ... 8xx clouds)
    pub id: u16,
    /// Condition group, e.g. "Rain"
    pub main: String,
    /// Description, e.g. "light rain"
    pub description: String,
    /// Icon id, e.g. "10d"
    pub icon: String,
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name resolved by the provider
    pub city: String,
    /// ISO 3166 country code
    pub country: Option<String>,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Apparent (feels like) temperature
    pub feels_like: f64,
    /// Minimum temperature currently observed in the area
    pub temperature_min: f64,
    /// Maximum temperature currently observed in the area
    pub temperature_max: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Sea level pressure in hPa
    pub pressure: f64,
    /// Wind speed (m/s metric, mph imperial)
    pub wind_speed: f64,
    /// Visibility in metres (capped at 10 km by the provider)
    pub visibility: Option<f64>,
    /// Cloudiness percentage (0-100)
    pub cloudiness: f64,
    /// Primary condition
    pub condition: Condition,
    /// Sunrise (UTC)
    pub sunrise: DateTime<Utc>,
    /// Sunset (UTC)
    pub sunset: DateTime<Utc>,
    /// Observation time (UTC)
    pub observed_at: DateTime<Utc>,
    /// Shift in seconds from UTC for the city
    pub timezone_offset: i32,
}

/// One 3-hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast time (UTC)
    pub time: DateTime<Utc>,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Apparent temperature
    pub feels_like: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Primary condition
    pub condition: Condition,
}

/// Five-day forecast in 3-hour steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// City name resolved by the provider
    pub city: Option<String>,
    /// Shift in seconds from UTC for the city
    pub timezone_offset: Option<i32>,
    /// Entries in chronological order
    pub entries: Vec<ForecastEntry>,
}

// ============================================================================
// Raw API shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    pub id: u16,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMain {
    pub temp: f64,
    pub feels_like: f64,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiClouds {
    pub all: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSys {
    #[serde(default)]
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Response of `GET /weather`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiCurrentResponse {
    #[serde(default)]
    pub weather: Vec<ApiCondition>,
    pub main: Option<ApiMain>,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub wind: Option<ApiWind>,
    #[serde(default)]
    pub clouds: Option<ApiClouds>,
    pub dt: Option<i64>,
    pub sys: Option<ApiSys>,
    #[serde(default)]
    pub timezone: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecastItem {
    pub dt: i64,
    pub main: Option<ApiMain>,
    #[serde(default)]
    pub weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecastCity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// Response of `GET /forecast`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecastResponse {
    pub list: Option<Vec<ApiForecastItem>>,
    #[serde(default)]
    pub city: Option<ApiForecastCity>,
}

/// Error body, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ApiCondition> for Condition {
    fn from(c: ApiCondition) -> Self {
        Self {
            id: c.id,
            main: c.main,
            description: c.description,
            icon: c.icon,
        }
    }
}
