use domain::UnitMode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::AppConfigError;

// ==============================
// Weather Configuration
// ==============================

/// Weather provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// OpenWeatherMap API key (sensitive - uses SecretString)
    ///
    /// There is no built-in fallback; set it in `skycast.toml` or through
    /// `SKYCAST_WEATHER__API_KEY`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Unit system a new session starts in
    #[serde(default)]
    pub default_units: UnitMode,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("default_units", &self.default_units)
            .finish()
    }
}

pub(super) fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

pub(super) const fn default_weather_timeout() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
            api_key: None,
            default_units: UnitMode::default(),
        }
    }
}

impl WeatherAppConfig {
    /// The API key, if one is configured and not blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Build the client configuration
    ///
    /// # Errors
    ///
    /// Returns [`AppConfigError::MissingApiKey`] if no usable key is set.
    pub fn client_config(&self) -> Result<integration_weather::WeatherConfig, AppConfigError> {
        let key = self.api_key().ok_or(AppConfigError::MissingApiKey)?;
        Ok(integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            api_key: SecretString::from(key.trim()),
        })
    }
}
