//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CityName, CurrentConditions, ForecastSample, SkyCondition, UnitMode};
use integration_weather::{
    Condition, CurrentWeather, ForecastEntry, OpenWeatherMapClient, WeatherClient, WeatherConfig,
    WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::BadRequest(e) => ApplicationError::InvalidRequest(e),
            WeatherError::CityNotFound(e) => ApplicationError::NotFound(e),
            WeatherError::Unauthorized(e) => ApplicationError::Configuration(e),
            WeatherError::ParseError(e) => ApplicationError::MalformedResponse(e),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn map_condition(condition: Condition) -> SkyCondition {
        SkyCondition {
            code: condition.id,
            main: condition.main,
            description: condition.description,
            icon: condition.icon,
        }
    }

    /// Convert provider current weather to domain current conditions
    fn map_current(current: CurrentWeather, units: UnitMode) -> CurrentConditions {
        CurrentConditions {
            city: current.city,
            country: current.country,
            temperature: current.temperature,
            feels_like: current.feels_like,
            temperature_min: current.temperature_min,
            temperature_max: current.temperature_max,
            humidity: current.humidity,
            pressure: current.pressure,
            wind_speed: current.wind_speed,
            visibility: current.visibility,
            cloudiness: current.cloudiness,
            condition: Self::map_condition(current.condition),
            sunrise: current.sunrise,
            sunset: current.sunset,
            observed_at: current.observed_at,
            utc_offset_seconds: current.timezone_offset,
            units,
        }
    }

    /// Convert one provider forecast entry to a domain forecast sample
    fn map_sample(entry: ForecastEntry, units: UnitMode) -> ForecastSample {
        ForecastSample {
            timestamp: entry.time,
            temperature: entry.temperature,
            feels_like: entry.feels_like,
            humidity: entry.humidity,
            condition: Self::map_condition(entry.condition),
            units,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn current_conditions(
        &self,
        city: &CityName,
        units: UnitMode,
    ) -> Result<CurrentConditions, ApplicationError> {
        let current = self
            .client
            .current_weather(city, units)
            .await
            .map_err(Self::map_error)?;

        debug!(
            resolved = %current.city,
            temperature = current.temperature,
            "Received current weather"
        );
        Ok(Self::map_current(current, units))
    }

    #[instrument(skip(self), fields(city = %city, units = %units))]
    async fn forecast(
        &self,
        city: &CityName,
        units: UnitMode,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let forecast = self
            .client
            .forecast(city, units)
            .await
            .map_err(Self::map_error)?;

        debug!(entries = forecast.entries.len(), "Received forecast");
        Ok(forecast
            .entries
            .into_iter()
            .map(|entry| Self::map_sample(entry, units))
            .collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
