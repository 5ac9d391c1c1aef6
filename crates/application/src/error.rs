//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Message shown when the provider does not know the requested city
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please check the spelling and try again.";

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (input validation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider has no data for the requested city
    #[error("Not found: {0}")]
    NotFound(String),

    /// The provider rejected the request itself (4xx other than 401/404/429)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The provider answered with a body that could not be used
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// External service error (transport, timeout, 5xx)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error (missing or rejected credential)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Single line shown to the user in place of the weather display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(e) => e.to_string(),
            Self::NotFound(_) => CITY_NOT_FOUND_MESSAGE.to_string(),
            Self::InvalidRequest(detail) => {
                format!("The weather service could not process this search: {detail}")
            },
            Self::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_string()
            },
            Self::Configuration(_) => {
                "The weather service rejected the configured API key.".to_string()
            },
            Self::MalformedResponse(_) => {
                "The weather service returned incomplete data. Please try again.".to_string()
            },
            Self::ExternalService(_) | Self::Internal(_) => {
                "Weather service is unavailable. Please try again later.".to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = ApplicationError::from(DomainError::EmptyCityName);
        assert_eq!(err.user_message(), "Please enter a city name");
    }

    #[test]
    fn not_found_message() {
        let err = ApplicationError::NotFound("city not found".to_string());
        assert_eq!(err.user_message(), CITY_NOT_FOUND_MESSAGE);
        assert_eq!(err.to_string(), "Not found: city not found");
    }

    #[test]
    fn rejected_request_is_not_reported_as_outage() {
        let err = ApplicationError::InvalidRequest("Nothing to geocode".into());
        let message = err.user_message();
        assert_eq!(
            message,
            "The weather service could not process this search: Nothing to geocode"
        );
        assert!(!message.contains("unavailable"));
    }

    #[test]
    fn user_messages_do_not_leak_details() {
        let err = ApplicationError::Configuration("Invalid API key abc123".into());
        assert!(!err.user_message().contains("abc123"));
    }
}
