//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - `skycast.toml` in the working directory, or the file passed explicitly
//! - environment variables prefixed `SKYCAST_`, nested with `__`
//!   (e.g. `SKYCAST_WEATHER__API_KEY`, `SKYCAST_TELEMETRY__JSON`)

mod weather;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use weather::WeatherAppConfig;

/// Default configuration file name, without extension
pub const DEFAULT_CONFIG_NAME: &str = "skycast";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKYCAST";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No usable API key is configured
    #[error(
        "OpenWeatherMap API key is missing. Set weather.api_key in skycast.toml \
         or the SKYCAST_WEATHER__API_KEY environment variable"
    )]
    MissingApiKey,

    /// A value is out of range
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// With `path` set, that file must exist; otherwise `skycast.toml` is
    /// read when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, AppConfigError> {
        Self::load_with_env(
            path,
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Like [`load`](Self::load) with an explicit environment source
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, AppConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", weather::default_weather_base_url())?
            .set_default("weather.timeout_secs", weather::default_weather_timeout())?
            .set_default("weather.default_units", "metric")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables
            .add_source(env);

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Check that the configuration can be used to reach the provider
    ///
    /// # Errors
    ///
    /// Returns [`AppConfigError::MissingApiKey`] if the key is absent or
    /// blank, and [`AppConfigError::Invalid`] for a zero timeout or an empty
    /// base URL.
    pub fn validate(&self) -> Result<(), AppConfigError> {
        if self.weather.api_key().is_none() {
            return Err(AppConfigError::MissingApiKey);
        }
        if self.weather.timeout_secs == 0 {
            return Err(AppConfigError::Invalid {
                field: "weather.timeout_secs",
                reason: "must be greater than zero".into(),
            });
        }
        if self.weather.base_url.trim().is_empty() {
            return Err(AppConfigError::Invalid {
                field: "weather.base_url",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use domain::UnitMode;
    use secrecy::{ExposeSecret, SecretString};

    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(map))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.weather.default_units, UnitMode::Metric);
        assert!(config.weather.api_key.is_none());
        assert!(!config.telemetry.json);
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config(
            r#"
            [weather]
            api_key = "from-file"
            timeout_secs = 4
            default_units = "imperial"

            [telemetry]
            log_filter = "debug"
            json = true
            "#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.weather.api_key(), Some("from-file"));
        assert_eq!(config.weather.timeout_secs, 4);
        assert_eq!(config.weather.default_units, UnitMode::Imperial);
        assert_eq!(config.telemetry.log_filter, "debug");
        assert!(config.telemetry.json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("[weather]\napi_key = \"from-file\"\n");
        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("SKYCAST_WEATHER__API_KEY", "from-env"),
                ("SKYCAST_WEATHER__TIMEOUT_SECS", "3"),
            ]),
        )
        .unwrap();
        assert_eq!(config.weather.api_key(), Some("from-env"));
        assert_eq!(config.weather.timeout_secs, 3);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load_with_env(Some(&missing), env(&[])),
            Err(AppConfigError::Load(_))
        ));
    }

    #[test]
    fn validate_requires_api_key() {
        let config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(AppConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn validate_rejects_blank_api_key() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some(SecretString::from("   "));
        assert!(matches!(
            config.validate(),
            Err(AppConfigError::MissingApiKey)
        ));
        assert!(config.weather.client_config().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some(SecretString::from("key"));
        config.weather.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(AppConfigError::Invalid {
                field: "weather.timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn valid_config_builds_client_config() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some(SecretString::from(" key-123 "));
        assert!(config.validate().is_ok());

        let client = config.weather.client_config().unwrap();
        assert_eq!(client.api_key.expose_secret(), "key-123");
        assert_eq!(client.timeout_secs, 10);
    }

    #[test]
    fn api_key_is_redacted_and_not_serialized() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some(SecretString::from("super-secret"));

        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));

        let toml = toml::to_string(&config).unwrap();
        assert!(!toml.contains("super-secret"));
        assert!(toml.contains("base_url"));
    }
}
