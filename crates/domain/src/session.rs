//! Session state machine
//!
//! The whole display state lives in one immutable [`SessionState`]. Every
//! change is an event applied by [`SessionState::apply`], which returns the
//! next state. Each search is tagged with a monotonically increasing
//! [`RequestId`]; completions carrying an older id are dropped, so the last
//! *submitted* search always wins regardless of response order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::WeatherReport;
use crate::value_objects::{CityName, Theme, UnitMode};

/// Sequence number of a submitted search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Something that happened in the UI or came back from the provider
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A valid city was submitted; a new request is about to be issued
    SearchSubmitted { city: CityName },
    /// The input was rejected before any request was issued
    SearchRejected { message: String },
    /// Both provider calls for `request` succeeded
    SearchSucceeded {
        request: RequestId,
        report: Box<WeatherReport>,
    },
    /// The lookup for `request` failed
    SearchFailed { request: RequestId, message: String },
    /// Switch between metric and imperial display
    UnitToggled,
    /// Switch between dark and light theme
    ThemeToggled,
    /// Clock update
    Tick { now: DateTime<Utc> },
}

impl SessionEvent {
    /// Short event name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SearchSubmitted { .. } => "search-submitted",
            Self::SearchRejected { .. } => "search-rejected",
            Self::SearchSucceeded { .. } => "search-succeeded",
            Self::SearchFailed { .. } => "search-failed",
            Self::UnitToggled => "unit-toggled",
            Self::ThemeToggled => "theme-toggled",
            Self::Tick { .. } => "tick",
        }
    }
}

/// Complete display state of one session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    city: Option<CityName>,
    report: Option<WeatherReport>,
    error: Option<String>,
    units: UnitMode,
    theme: Theme,
    now: DateTime<Utc>,
    latest_request: RequestId,
    busy: bool,
}

impl SessionState {
    /// Fresh session with no data
    #[must_use]
    pub fn new(units: UnitMode, theme: Theme, now: DateTime<Utc>) -> Self {
        Self {
            city: None,
            report: None,
            error: None,
            units,
            theme,
            now,
            latest_request: RequestId::default(),
            busy: false,
        }
    }

    /// Apply one event and return the resulting state
    #[must_use]
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::SearchSubmitted { city } => Self {
                city: Some(city),
                error: None,
                latest_request: self.latest_request.next(),
                busy: true,
                ..self
            },
            SessionEvent::SearchRejected { message } => Self {
                report: None,
                error: Some(message),
                ..self
            },
            SessionEvent::SearchSucceeded { request, report } => {
                if request != self.latest_request {
                    return self;
                }
                Self {
                    report: Some(*report),
                    error: None,
                    busy: false,
                    ..self
                }
            },
            SessionEvent::SearchFailed { request, message } => {
                if request != self.latest_request {
                    return self;
                }
                Self {
                    report: None,
                    error: Some(message),
                    busy: false,
                    ..self
                }
            },
            SessionEvent::UnitToggled => Self {
                units: self.units.toggled(),
                ..self
            },
            SessionEvent::ThemeToggled => Self {
                theme: self.theme.toggled(),
                ..self
            },
            SessionEvent::Tick { now } => Self { now, ..self },
        }
    }

    /// Id that the most recent `SearchSubmitted` assigned
    #[must_use]
    pub const fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    #[must_use]
    pub const fn city(&self) -> Option<&CityName> {
        self.city.as_ref()
    }

    #[must_use]
    pub const fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn units(&self) -> UnitMode {
        self.units
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// A search is in flight
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }
}
