//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current-weather and forecast endpoints.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{CityName, UnitMode};
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    ApiCondition, ApiCurrentResponse, ApiErrorBody, ApiForecastItem, ApiForecastResponse,
    Condition, CurrentWeather, Forecast, ForecastEntry,
};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider rejected the request as invalid (4xx)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// API key sent as `appid` (sensitive - uses SecretString)
    #[serde(skip_serializing)]
    pub api_key: SecretString,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl WeatherConfig {
    /// Configuration with default endpoint and timeout for the given key
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            api_key,
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn current_weather(
        &self,
        city: &CityName,
        units: UnitMode,
    ) -> Result<CurrentWeather, WeatherError>;

    /// Get the 3-hourly five-day forecast for a city
    async fn forecast(&self, city: &CityName, units: UnitMode) -> Result<Forecast, WeatherError>;

    /// Check if the weather service is reachable with the configured key
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the URL for an endpoint below the base URL
    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET for `endpoint` and map non-success statuses
    async fn get(
        &self,
        endpoint: &str,
        city: &CityName,
        units: UnitMode,
    ) -> Result<Response, WeatherError> {
        let url = self.endpoint(endpoint);
        debug!(url = %url, city = %city, units = %units, "Requesting weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.config.api_key.expose_secret()),
                ("units", units.as_query()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = Self::error_message(response).await;
        Err(Self::map_status(status, message))
    }

    /// Extract the provider's `message` field from an error body
    async fn error_message(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
    }

    /// Map a non-success status to a client error
    fn map_status(status: StatusCode, message: Option<String>) -> WeatherError {
        let detail = message.unwrap_or_else(|| format!("HTTP {status}"));
        match status {
            StatusCode::NOT_FOUND => WeatherError::CityNotFound(detail),
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized(detail),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(detail),
            s if s.is_client_error() => WeatherError::BadRequest(detail),
            _ => WeatherError::RequestFailed(detail),
        }
    }

    /// Convert a unix timestamp to `DateTime<Utc>`
    fn parse_timestamp(secs: i64) -> Result<DateTime<Utc>, WeatherError> {
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid timestamp: {secs}")))
    }

    /// Take the primary condition of a reading
    fn primary_condition(conditions: Vec<ApiCondition>) -> Result<Condition, WeatherError> {
        conditions
            .into_iter()
            .next()
            .map(Condition::from)
            .ok_or_else(|| WeatherError::ParseError("No weather condition in response".into()))
    }

    /// Parse current weather from API response
    fn parse_current_weather(data: ApiCurrentResponse) -> Result<CurrentWeather, WeatherError> {
        let main = data
            .main
            .ok_or_else(|| WeatherError::ParseError("No main readings in response".into()))?;
        let wind = data
            .wind
            .ok_or_else(|| WeatherError::ParseError("No wind readings in response".into()))?;
        let sys = data
            .sys
            .ok_or_else(|| WeatherError::ParseError("No sys section in response".into()))?;
        let observed = data
            .dt
            .ok_or_else(|| WeatherError::ParseError("No observation time in response".into()))?;
        let sunrise = sys
            .sunrise
            .ok_or_else(|| WeatherError::ParseError("No sunrise in response".into()))?;
        let sunset = sys
            .sunset
            .ok_or_else(|| WeatherError::ParseError("No sunset in response".into()))?;
        let condition = Self::primary_condition(data.weather)?;

        Ok(CurrentWeather {
            city: data.name.unwrap_or_default(),
            country: sys.country,
            temperature: main.temp,
            feels_like: main.feels_like,
            temperature_min: main.temp_min.unwrap_or(main.temp),
            temperature_max: main.temp_max.unwrap_or(main.temp),
            humidity: main.humidity.unwrap_or_default(),
            pressure: main.pressure.unwrap_or_default(),
            wind_speed: wind.speed,
            visibility: data.visibility,
            cloudiness: data.clouds.map_or(0.0, |c| c.all),
            condition,
            sunrise: Self::parse_timestamp(sunrise)?,
            sunset: Self::parse_timestamp(sunset)?,
            observed_at: Self::parse_timestamp(observed)?,
            timezone_offset: data.timezone.unwrap_or(0),
        })
    }

    /// Parse one forecast entry
    fn parse_forecast_entry(item: ApiForecastItem) -> Result<ForecastEntry, WeatherError> {
        let main = item.main.ok_or_else(|| {
            WeatherError::ParseError(format!("No main readings for forecast at {}", item.dt))
        })?;

        Ok(ForecastEntry {
            time: Self::parse_timestamp(item.dt)?,
            temperature: main.temp,
            feels_like: main.feels_like,
            humidity: main.humidity.unwrap_or_default(),
            condition: Self::primary_condition(item.weather)?,
        })
    }

    /// Parse the forecast series from API response
    fn parse_forecast(data: ApiForecastResponse) -> Result<Forecast, WeatherError> {
        let list = data
            .list
            .ok_or_else(|| WeatherError::ParseError("No forecast list in response".into()))?;

        let mut entries = list
            .into_iter()
            .map(Self::parse_forecast_entry)
            .collect::<Result<Vec<_>, _>>()?;
        // The provider sends the series in order; keep that guarantee explicit.
        entries.sort_by_key(|e| e.time);

        let (city, timezone_offset) = data
            .city
            .map_or((None, None), |c| (c.name, c.timezone));

        Ok(Forecast {
            city,
            timezone_offset,
            entries,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn current_weather(
        &self,
        city: &CityName,
        units: UnitMode,
    ) -> Result<CurrentWeather, WeatherError> {
        let response = self.get("weather", city, units).await?;

        let api_response: ApiCurrentResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Self::parse_current_weather(api_response)
    }

    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn forecast(&self, city: &CityName, units: UnitMode) -> Result<Forecast, WeatherError> {
        let response = self.get("forecast", city, units).await?;

        let api_response: ApiForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let forecast = Self::parse_forecast(api_response)?;
        debug!(entries = forecast.entries.len(), "Parsed forecast");
        Ok(forecast)
    }

    async fn is_healthy(&self) -> bool {
        // Simple health check against a city that always exists
        match CityName::new("London") {
            Ok(city) => self.current_weather(&city, UnitMode::Metric).await.is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiClouds, ApiForecastCity, ApiMain, ApiSys, ApiWind};

    fn config() -> WeatherConfig {
        WeatherConfig::new(SecretString::from("test-key"))
    }

    fn api_condition() -> ApiCondition {
        ApiCondition {
            id: 801,
            main: "Clouds".to_string(),
            description: "few clouds".to_string(),
            icon: "02d".to_string(),
        }
    }

    fn api_main(temp: f64) -> ApiMain {
        ApiMain {
            temp,
            feels_like: temp - 1.0,
            temp_min: Some(temp - 2.0),
            temp_max: Some(temp + 2.0),
            pressure: Some(1016.0),
            humidity: Some(55.0),
        }
    }

    fn api_current() -> ApiCurrentResponse {
        ApiCurrentResponse {
            weather: vec![api_condition()],
            main: Some(api_main(24.4)),
            visibility: Some(10_000.0),
            wind: Some(ApiWind { speed: 3.6 }),
            clouds: Some(ApiClouds { all: 20.0 }),
            dt: Some(1_760_600_000),
            sys: Some(ApiSys {
                country: Some("NG".to_string()),
                sunrise: Some(1_760_592_000),
                sunset: Some(1_760_635_000),
            }),
            timezone: Some(3600),
            name: Some("Lagos".to_string()),
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = config();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.api_key.expose_secret(), "test-key");
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let rendered = format!("{:?}", config());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("test-key"));
    }

    #[test]
    fn test_config_serialization_skips_key() {
        let json = serde_json::to_string(&config()).expect("should serialize");
        assert!(!json.contains("test-key"));
        assert!(json.contains("base_url"));
    }

    #[test]
    fn test_config_deserialization_requires_key() {
        let result: Result<WeatherConfig, _> = serde_json::from_str(r#"{"timeout_secs": 5}"#);
        assert!(result.is_err());

        let config: WeatherConfig =
            serde_json::from_str(r#"{"api_key": "abc"}"#).expect("should deserialize");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.api_key.expose_secret(), "abc");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let mut config = config();
        config.base_url = "http://localhost:8080/".to_string();
        let client = OpenWeatherMapClient::new(config).expect("client creation should succeed");
        assert_eq!(client.endpoint("weather"), "http://localhost:8080/weather");
    }

    #[test]
    fn test_map_status() {
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::NOT_FOUND, Some("city not found".into())),
            WeatherError::CityNotFound(m) if m == "city not found"
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::UNAUTHORIZED, None),
            WeatherError::Unauthorized(m) if m.contains("401")
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::TOO_MANY_REQUESTS, None),
            WeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::BAD_GATEWAY, None),
            WeatherError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::BAD_REQUEST, None),
            WeatherError::BadRequest(_)
        ));
        assert!(matches!(
            OpenWeatherMapClient::map_status(StatusCode::NOT_MODIFIED, None),
            WeatherError::RequestFailed(_)
        ));
    }

    #[test]
    fn test_parse_current_weather() {
        let weather =
            OpenWeatherMapClient::parse_current_weather(api_current()).expect("should parse");
        assert_eq!(weather.city, "Lagos");
        assert_eq!(weather.country.as_deref(), Some("NG"));
        assert!((weather.temperature - 24.4).abs() < f64::EPSILON);
        assert!((weather.temperature_max - 26.4).abs() < 1e-9);
        assert!((weather.cloudiness - 20.0).abs() < f64::EPSILON);
        assert_eq!(weather.condition.icon, "02d");
        assert_eq!(weather.timezone_offset, 3600);
        assert_eq!(weather.observed_at.timestamp(), 1_760_600_000);
    }

    #[test]
    fn test_parse_current_weather_requires_main() {
        let mut data = api_current();
        data.main = None;
        assert!(matches!(
            OpenWeatherMapClient::parse_current_weather(data),
            Err(WeatherError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_current_weather_requires_condition() {
        let mut data = api_current();
        data.weather.clear();
        assert!(matches!(
            OpenWeatherMapClient::parse_current_weather(data),
            Err(WeatherError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_current_weather_defaults_optional_fields() {
        let mut data = api_current();
        data.clouds = None;
        data.visibility = None;
        data.timezone = None;
        let weather = OpenWeatherMapClient::parse_current_weather(data).expect("should parse");
        assert!(weather.visibility.is_none());
        assert!(weather.cloudiness.abs() < f64::EPSILON);
        assert_eq!(weather.timezone_offset, 0);
    }

    #[test]
    fn test_parse_forecast_sorts_and_keeps_city() {
        let data = ApiForecastResponse {
            list: Some(vec![
                ApiForecastItem {
                    dt: 1_760_610_800,
                    main: Some(api_main(20.0)),
                    weather: vec![api_condition()],
                },
                ApiForecastItem {
                    dt: 1_760_600_000,
                    main: Some(api_main(18.0)),
                    weather: vec![api_condition()],
                },
            ]),
            city: Some(ApiForecastCity {
                name: Some("Lagos".to_string()),
                timezone: Some(3600),
            }),
        };

        let forecast = OpenWeatherMapClient::parse_forecast(data).expect("should parse");
        assert_eq!(forecast.entries.len(), 2);
        assert!(forecast.entries[0].time < forecast.entries[1].time);
        assert_eq!(forecast.city.as_deref(), Some("Lagos"));
        assert_eq!(forecast.timezone_offset, Some(3600));
    }

    #[test]
    fn test_parse_forecast_without_list_is_error() {
        let data = ApiForecastResponse {
            list: None,
            city: None,
        };
        assert!(matches!(
            OpenWeatherMapClient::parse_forecast(data),
            Err(WeatherError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_forecast_empty_list_is_ok() {
        let data = ApiForecastResponse {
            list: Some(Vec::new()),
            city: None,
        };
        let forecast = OpenWeatherMapClient::parse_forecast(data).expect("should parse");
        assert!(forecast.entries.is_empty());
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::CityNotFound("city not found".into());
        assert_eq!(err.to_string(), "City not found: city not found");

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenWeatherMapClient::new(config()).is_ok());
    }
}
