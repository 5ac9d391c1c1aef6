//! Entities - weather records as fetched from the provider

mod weather_report;

pub use weather_report::{CurrentConditions, ForecastSample, SkyCondition, WeatherReport};
