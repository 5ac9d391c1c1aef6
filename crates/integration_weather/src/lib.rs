//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap 2.5 API (<https://openweathermap.org/api>).
//! Provides current conditions and the 3-hourly five-day forecast for a city
//! name. Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{Condition, CurrentWeather, Forecast, ForecastEntry};
