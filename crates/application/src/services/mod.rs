//! Application services - Use case implementations

pub(crate) mod lookup_service;
mod session_service;

pub use lookup_service::WeatherLookupService;
pub use session_service::{PendingSearch, WeatherSession};
