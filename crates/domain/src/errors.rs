//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Search text was empty or whitespace only
    #[error("Please enter a city name")]
    EmptyCityName,

    /// Unknown unit system selector
    #[error("Invalid unit mode: {0}. Use 'metric' or 'imperial'")]
    InvalidUnitMode(String),

    /// Unknown theme selector
    #[error("Invalid theme: {0}. Use 'dark' or 'light'")]
    InvalidTheme(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
