//! Interactive weather session
//!
//! Owns one [`SessionState`] and is the only place that advances it. Each
//! search is tagged with the request id assigned when it was submitted, so a
//! slow response for an older search can never overwrite a newer one.

use chrono::{DateTime, Utc};
use domain::{
    CityName, ForecastAggregator, RequestId, SessionEvent, SessionState, Theme, UnitMode,
    WeatherReport,
};
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::ApplicationError;
use crate::presenter::WeatherView;
use crate::services::WeatherLookupService;

/// A search that has been accepted and still needs its provider calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub request: RequestId,
    pub city: CityName,
    /// Unit system to query the provider in
    pub units: UnitMode,
}

/// Drives one session: dispatches events and runs searches
#[derive(Debug)]
pub struct WeatherSession {
    lookup: WeatherLookupService,
    aggregator: ForecastAggregator,
    state: RwLock<SessionState>,
}

impl WeatherSession {
    /// Create a session with no data, clock set to now
    #[must_use]
    pub fn new(lookup: WeatherLookupService, units: UnitMode, theme: Theme) -> Self {
        Self::with_state(lookup, SessionState::new(units, theme, Utc::now()))
    }

    /// Create a session from an existing state
    #[must_use]
    pub fn with_state(lookup: WeatherLookupService, state: SessionState) -> Self {
        Self {
            lookup,
            aggregator: ForecastAggregator::default(),
            state: RwLock::new(state),
        }
    }

    /// Apply one event and return the resulting state
    pub fn dispatch(&self, event: SessionEvent) -> SessionState {
        debug!(event = event.name(), "Dispatching session event");
        let mut state = self.state.write();
        let next = state.clone().apply(event);
        *state = next.clone();
        next
    }

    /// Validate `raw_city` and register a new search
    ///
    /// Returns `None` when the input was rejected; the rejection is already
    /// recorded in the state and no request must be issued.
    pub fn begin_search(&self, raw_city: &str) -> Option<PendingSearch> {
        match CityName::new(raw_city) {
            Ok(city) => {
                let state = self.dispatch(SessionEvent::SearchSubmitted { city: city.clone() });
                Some(PendingSearch {
                    request: state.latest_request(),
                    city,
                    units: state.units(),
                })
            },
            Err(e) => {
                let error = ApplicationError::from(e);
                self.dispatch(SessionEvent::SearchRejected {
                    message: error.user_message(),
                });
                None
            },
        }
    }

    /// Record the outcome of `request`; ignored if a newer search exists
    pub fn complete_search(
        &self,
        request: RequestId,
        outcome: Result<WeatherReport, ApplicationError>,
    ) -> SessionState {
        let event = match outcome {
            Ok(report) => SessionEvent::SearchSucceeded {
                request,
                report: Box::new(report),
            },
            Err(e) => SessionEvent::SearchFailed {
                request,
                message: e.user_message(),
            },
        };
        let state = self.dispatch(event);
        if state.latest_request() != request {
            info!(
                request = request.value(),
                latest = state.latest_request().value(),
                "Discarded response for superseded search"
            );
        }
        state
    }

    /// Issue the provider calls for an accepted search and record the outcome
    pub async fn run(&self, pending: PendingSearch) -> SessionState {
        let outcome = self.lookup.fetch(&pending.city, pending.units).await;
        self.complete_search(pending.request, outcome)
    }

    /// Run a full search for `raw_city` and return the resulting state
    pub async fn submit(&self, raw_city: &str) -> SessionState {
        match self.begin_search(raw_city) {
            Some(pending) => self.run(pending).await,
            None => self.snapshot(),
        }
    }

    /// Switch display units; the current report is re-rendered, not re-fetched
    pub fn toggle_units(&self) -> SessionState {
        self.dispatch(SessionEvent::UnitToggled)
    }

    pub fn toggle_theme(&self) -> SessionState {
        self.dispatch(SessionEvent::ThemeToggled)
    }

    /// Advance the clock
    pub fn tick(&self, now: DateTime<Utc>) -> SessionState {
        self.dispatch(SessionEvent::Tick { now })
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Display model of the current state
    #[must_use]
    pub fn view(&self) -> WeatherView {
        WeatherView::from_state(&self.state.read(), &self.aggregator)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::CITY_NOT_FOUND_MESSAGE;
    use crate::ports::MockWeatherPort;
    use crate::presenter::ViewBody;
    use crate::services::lookup_service::test_support::{at, conditions, series};

    fn session(mock: MockWeatherPort) -> WeatherSession {
        let lookup = WeatherLookupService::new(Arc::new(mock));
        WeatherSession::with_state(
            lookup,
            SessionState::new(UnitMode::Metric, Theme::Dark, at()),
        )
    }

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            current: conditions(city, UnitMode::Metric),
            forecast: series(40, UnitMode::Metric),
            fetched_at: at(),
        }
    }

    #[tokio::test]
    async fn submit_stores_report() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .times(1)
            .returning(|c, u| Ok(conditions(c.as_str(), u)));
        mock.expect_forecast()
            .times(1)
            .returning(|_, u| Ok(series(40, u)));

        let state = session(mock).submit("Lagos").await;

        assert!(!state.is_busy());
        assert!(state.error().is_none());
        assert_eq!(state.report().map(|r| r.current.city.as_str()), Some("Lagos"));
    }

    #[tokio::test]
    async fn blank_submit_is_rejected_without_request() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions().times(0);
        mock.expect_forecast().times(0);

        let state = session(mock).submit("  ").await;

        assert_eq!(state.error(), Some("Please enter a city name"));
        assert!(state.report().is_none());
        assert_eq!(state.latest_request(), RequestId::default());
    }

    #[tokio::test]
    async fn not_found_sets_friendly_error() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .times(1)
            .returning(|_, _| Err(ApplicationError::NotFound("city not found".into())));
        mock.expect_forecast().times(0);

        let s = session(mock);
        let state = s.submit("Atlantis").await;

        assert_eq!(state.error(), Some(CITY_NOT_FOUND_MESSAGE));
        assert!(matches!(s.view().body, ViewBody::Error { .. }));
    }

    #[test]
    fn older_response_arriving_last_is_discarded() {
        let s = session(MockWeatherPort::new());
        let first = s.begin_search("Paris").unwrap();
        let second = s.begin_search("Tokyo").unwrap();
        assert!(second.request > first.request);

        s.complete_search(second.request, Ok(report("Tokyo")));
        let state = s.complete_search(first.request, Ok(report("Paris")));

        assert_eq!(state.report().map(|r| r.current.city.as_str()), Some("Tokyo"));
        assert!(!state.is_busy());
    }

    #[test]
    fn stale_failure_does_not_clear_newer_report() {
        let s = session(MockWeatherPort::new());
        let first = s.begin_search("Paris").unwrap();
        let second = s.begin_search("Tokyo").unwrap();

        s.complete_search(second.request, Ok(report("Tokyo")));
        let state = s.complete_search(
            first.request,
            Err(ApplicationError::ExternalService("timeout".into())),
        );

        assert!(state.error().is_none());
        assert!(state.report().is_some());
    }

    #[test]
    fn pending_search_carries_display_units() {
        let s = session(MockWeatherPort::new());
        s.toggle_units();
        let pending = s.begin_search("Dubai").unwrap();
        assert_eq!(pending.units, UnitMode::Imperial);
        assert_eq!(pending.city.as_str(), "Dubai");
    }

    #[tokio::test]
    async fn toggle_units_does_not_refetch() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .times(1)
            .returning(|c, u| Ok(conditions(c.as_str(), u)));
        mock.expect_forecast()
            .times(1)
            .returning(|_, u| Ok(series(40, u)));

        let s = session(mock);
        s.submit("London").await;
        let state = s.toggle_units();

        assert_eq!(state.units(), UnitMode::Imperial);
        assert_eq!(state.report().map(WeatherReport::units), Some(UnitMode::Metric));
        let view = s.view();
        assert_eq!(view.report().map(|r| r.temperature.as_str()), Some("68°F"));
    }

    #[test]
    fn theme_and_tick() {
        let s = session(MockWeatherPort::new());
        let later = at() + chrono::Duration::seconds(1);
        s.toggle_theme();
        let state = s.tick(later);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.now(), later);
        assert_eq!(s.snapshot(), state);
    }
}
