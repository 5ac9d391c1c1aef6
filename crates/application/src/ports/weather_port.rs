//! Weather service port
//!
//! Defines the interface for weather data retrieval by city name.

use async_trait::async_trait;
use domain::{CityName, CurrentConditions, ForecastSample, UnitMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// Values come back in the unit system they were requested in, tagged with
/// that system.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city
    async fn current_conditions(
        &self,
        city: &CityName,
        units: UnitMode,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the 3-hourly forecast series for a city, in chronological order
    async fn forecast(
        &self,
        city: &CityName,
        units: UnitMode,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
