//! Display model
//!
//! [`WeatherView`] is everything a surface needs to draw one frame, already
//! converted to the session's display units and formatted as text. It is
//! rebuilt from [`SessionState`] on every render; nothing here is cached.

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use domain::{
    CurrentConditions, ForecastAggregator, ForecastSample, SessionState, Theme, UnitMode, convert,
};
use serde::Serialize;

/// Cities offered as one-keystroke searches
pub const QUICK_CITIES: [&str; 8] = [
    "Lagos", "London", "New York", "Tokyo", "Paris", "Dubai", "Sydney", "Mumbai",
];

/// Heading shown before the first search
pub const PLACEHOLDER_TITLE: &str = "Discover Weather Worldwide";

/// Text under [`PLACEHOLDER_TITLE`]
pub const PLACEHOLDER_TEXT: &str =
    "Search for any city to see real-time weather data and forecasts";

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const CLOCK_FORMAT: &str = "%I:%M:%S %p";
const SUN_FORMAT: &str = "%I:%M %p";
const WEEKDAY_FORMAT: &str = "%a";

/// One labelled value in the stats grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

impl Stat {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// One day of the daily forecast strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastCard {
    /// Short weekday name in the city's local time, e.g. "Mon"
    pub weekday: String,
    pub icon_url: String,
    /// Rounded temperature with unit, e.g. "21°C"
    pub temperature: String,
    pub description: String,
}

/// Current conditions block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    /// "City, CC"
    pub location: String,
    pub description: String,
    pub icon_url: String,
    pub temperature: String,
    pub feels_like: String,
    pub stats: Vec<Stat>,
    /// Sunrise in the city's local time
    pub sunrise: String,
    /// Sunset in the city's local time
    pub sunset: String,
    pub forecast: Vec<ForecastCard>,
}

/// Main area of the screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewBody {
    /// Nothing searched yet
    Placeholder {
        title: &'static str,
        text: &'static str,
    },
    /// Last search failed or was rejected
    Error { message: String },
    /// Last search succeeded
    Report(Box<ReportView>),
}

/// Complete display model of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherView {
    /// Long date, e.g. "Friday, October 16, 2026"
    pub date: String,
    /// Wall clock with seconds, e.g. "02:03:07 PM"
    pub clock: String,
    pub theme: Theme,
    pub theme_icon: &'static str,
    pub units: UnitMode,
    /// Label of the unit toggle, e.g. "°C → °F"
    pub toggle_hint: &'static str,
    /// A search is in flight
    pub busy: bool,
    pub body: ViewBody,
}

impl WeatherView {
    /// Build the view with the header clock in the machine's local time
    #[must_use]
    pub fn from_state(state: &SessionState, aggregator: &ForecastAggregator) -> Self {
        let now = state.now();
        let local = Local.offset_from_utc_datetime(&now.naive_utc()).fix();
        Self::from_state_in(state, aggregator, local)
    }

    /// Build the view with the header clock in `clock_offset`
    #[must_use]
    pub fn from_state_in(
        state: &SessionState,
        aggregator: &ForecastAggregator,
        clock_offset: FixedOffset,
    ) -> Self {
        let now = state.now().with_timezone(&clock_offset);
        let units = state.units();

        let body = match (state.report(), state.error()) {
            (_, Some(message)) => ViewBody::Error {
                message: message.to_string(),
            },
            (Some(report), None) => ViewBody::Report(Box::new(report_view(
                &report.current,
                &aggregator.select(&report.forecast),
                units,
            ))),
            (None, None) => ViewBody::Placeholder {
                title: PLACEHOLDER_TITLE,
                text: PLACEHOLDER_TEXT,
            },
        };

        Self {
            date: now.format(DATE_FORMAT).to_string(),
            clock: now.format(CLOCK_FORMAT).to_string(),
            theme: state.theme(),
            theme_icon: state.theme().icon(),
            units,
            toggle_hint: units.toggle_hint(),
            busy: state.is_busy(),
            body,
        }
    }

    /// The report block, if the last search succeeded
    #[must_use]
    pub fn report(&self) -> Option<&ReportView> {
        match &self.body {
            ViewBody::Report(report) => Some(report),
            _ => None,
        }
    }
}

fn local_time(at: DateTime<Utc>, offset: FixedOffset, format: &str) -> String {
    at.with_timezone(&offset).format(format).to_string()
}

fn report_view(
    current: &CurrentConditions,
    days: &[&ForecastSample],
    units: UnitMode,
) -> ReportView {
    let offset = current.local_offset();

    let mut stats = vec![
        Stat::new("Humidity", convert(current.humidity_measurement(), units)),
        Stat::new("Wind", convert(current.wind_measurement(), units)),
        Stat::new("Pressure", convert(current.pressure_measurement(), units)),
    ];
    if let Some(visibility) = current.visibility_measurement() {
        stats.push(Stat::new("Visibility", convert(visibility, units)));
    }
    stats.extend([
        Stat::new("Clouds", convert(current.cloudiness_measurement(), units)),
        Stat::new("Min Temp", convert(current.min_measurement(), units)),
        Stat::new("Max Temp", convert(current.max_measurement(), units)),
    ]);

    let forecast = days
        .iter()
        .map(|sample| ForecastCard {
            weekday: local_time(sample.timestamp, offset, WEEKDAY_FORMAT),
            icon_url: sample.condition.icon_url(),
            temperature: convert(sample.temperature_measurement(), units).to_string(),
            description: sample.condition.description.clone(),
        })
        .collect();

    ReportView {
        location: current.location_label(),
        description: current.condition.description.clone(),
        icon_url: current.condition.icon_url(),
        temperature: convert(current.temperature_measurement(), units).to_string(),
        feels_like: convert(current.feels_like_measurement(), units).to_string(),
        stats,
        sunrise: local_time(current.sunrise, offset, SUN_FORMAT),
        sunset: local_time(current.sunset, offset, SUN_FORMAT),
        forecast,
    }
}
