//! Wiring of configuration to the weather adapter

use std::sync::Arc;

use application::{WeatherLookupService, WeatherSession};
use domain::{Theme, UnitMode};
use infrastructure::{AppConfig, WeatherAdapter};
use tracing::info;

/// Lookup service on top of the configured OpenWeatherMap adapter
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the HTTP client
/// cannot be built.
pub fn build_lookup(config: &AppConfig) -> anyhow::Result<WeatherLookupService> {
    config.validate()?;
    let adapter = WeatherAdapter::with_config(config.weather.client_config()?)?;
    Ok(WeatherLookupService::new(Arc::new(adapter)))
}

/// Session starting in `units`, or the configured default
///
/// # Errors
///
/// See [`build_lookup`].
pub fn build_session(config: &AppConfig, units: Option<UnitMode>) -> anyhow::Result<WeatherSession> {
    Ok(WeatherSession::new(
        build_lookup(config)?,
        units.unwrap_or(config.weather.default_units),
        Theme::default(),
    ))
}

/// Ask the provider whether it accepts the configured key
///
/// # Errors
///
/// See [`build_lookup`]; an unreachable or rejecting provider yields
/// `Ok(false)`.
pub async fn check_provider(config: &AppConfig) -> anyhow::Result<bool> {
    let available = build_lookup(config)?.is_available().await;
    info!(available, base_url = %config.weather.base_url, "Provider check finished");
    Ok(available)
}
