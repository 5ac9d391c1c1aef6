//! City name value object
//!
//! The free-text search term sent to the weather provider.
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let city = CityName::new("  New York ").unwrap();
//! assert_eq!(city.as_str(), "New York");
//!
//! assert!(CityName::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A trimmed, non-empty city search term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Create a city name from raw user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCityName` if the input is blank.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the city name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CityName> for String {
    fn from(city: CityName) -> Self {
        city.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let city = CityName::new("\tLagos \n").unwrap();
        assert_eq!(city.as_str(), "Lagos");
        assert_eq!(city.to_string(), "Lagos");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(CityName::new("New York").unwrap().as_str(), "New York");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(CityName::new(""), Err(DomainError::EmptyCityName));
        assert_eq!(CityName::new("   "), Err(DomainError::EmptyCityName));
    }

    #[test]
    fn deserialization_validates() {
        let city: CityName = serde_json::from_str("\"Tokyo\"").unwrap();
        assert_eq!(city.as_str(), "Tokyo");
        assert!(serde_json::from_str::<CityName>("\" \"").is_err());
    }
}
