//! Logging infrastructure
//!
//! Sets up `tracing-subscriber` with an environment-aware filter and
//! optional JSON output.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, build_filter, init_telemetry};
