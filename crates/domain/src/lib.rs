//! Domain layer for Skycast
//!
//! Contains the weather entities, value objects, unit conversion, forecast
//! aggregation and the session state machine. This layer performs no I/O.

pub mod conversion;
pub mod entities;
pub mod errors;
pub mod forecast;
pub mod session;
pub mod value_objects;

pub use conversion::{ConvertedMeasurement, DisplayValue, convert};
pub use entities::*;
pub use errors::DomainError;
pub use forecast::ForecastAggregator;
pub use session::{RequestId, SessionEvent, SessionState};
pub use value_objects::*;
