//! Weather lookup service
//!
//! One search: validate the city name, fetch current conditions, then fetch
//! the forecast. The two calls are sequential and the result is all or
//! nothing; a forecast failure discards the current conditions as well.

use std::sync::Arc;

use chrono::Utc;
use domain::{CityName, UnitMode, WeatherReport};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Fetches complete weather reports through a [`WeatherPort`]
#[derive(Clone)]
pub struct WeatherLookupService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherLookupService").finish_non_exhaustive()
    }
}

impl WeatherLookupService {
    /// Create a new lookup service
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Validate `raw_city` and fetch a report for it
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Domain`] for blank input without touching
    /// the network, otherwise whatever the port reports.
    pub async fn lookup(
        &self,
        raw_city: &str,
        units: UnitMode,
    ) -> Result<WeatherReport, ApplicationError> {
        let city = CityName::new(raw_city)?;
        self.fetch(&city, units).await
    }

    /// Fetch a report for an already validated city
    ///
    /// # Errors
    ///
    /// Returns the first port error; the forecast is not requested when the
    /// current-conditions call fails.
    #[instrument(skip(self), fields(city = %city, units = %units))]
    pub async fn fetch(
        &self,
        city: &CityName,
        units: UnitMode,
    ) -> Result<WeatherReport, ApplicationError> {
        let current = self
            .weather
            .current_conditions(city, units)
            .await
            .inspect_err(|e| warn!(error = %e, "Current conditions lookup failed"))?;
        debug!(resolved = %current.location_label(), "Fetched current conditions");

        let forecast = self
            .weather
            .forecast(city, units)
            .await
            .inspect_err(|e| warn!(error = %e, "Forecast lookup failed"))?;

        info!(
            city = %current.location_label(),
            samples = forecast.len(),
            "Weather lookup complete"
        );

        Ok(WeatherReport {
            current,
            forecast,
            fetched_at: Utc::now(),
        })
    }

    /// Check if the weather service is available
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }
}
