//! Test doubles for the route provider and the pacing seam.
//!
//! [`StubRouteProvider`] answers every query with a pre-configured metric or
//! error, optionally failing specific address pairs, and records each call so
//! tests can count provider traffic. [`RecordingPause`] records requested
//! delays instead of sleeping.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::{Pause, RouteError, RouteMetric, RouteProvider};

/// Stub `RouteProvider` returning canned responses.
///
/// # Example
///
/// ```
/// use depot_core::test_support::StubRouteProvider;
/// use depot_core::{RouteError, RouteProvider};
///
/// let provider = StubRouteProvider::with_minutes_and_miles(5.0, 2.0)
///     .failing_on("1 Main St", "2 Oak Ave", RouteError::EmptyAddress);
///
/// assert!(provider.query("1 Main St", "2 Oak Ave").is_err());
/// assert!(provider.query("2 Oak Ave", "1 Main St").is_ok());
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StubRouteProvider {
    response: StubResponse,
    overrides: BTreeMap<(String, String), RouteError>,
    calls: RefCell<Vec<(String, String)>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Metric(RouteMetric),
    Error(RouteError),
}

impl StubRouteProvider {
    /// Answer every query with `metric`.
    #[must_use]
    pub fn with_metric(metric: RouteMetric) -> Self {
        Self::with_response(StubResponse::Metric(metric))
    }

    /// Answer every query with a duration-only metric.
    ///
    /// # Panics
    ///
    /// Panics when `minutes` is negative or not finite.
    #[must_use]
    pub fn with_minutes(minutes: f64) -> Self {
        let metric = RouteMetric::from_minutes(minutes)
            .unwrap_or_else(|| panic!("invalid stub duration {minutes}"));
        Self::with_metric(metric)
    }

    /// Answer every query with a duration and a distance.
    ///
    /// # Panics
    ///
    /// Panics when either value is negative or not finite.
    #[must_use]
    pub fn with_minutes_and_miles(minutes: f64, miles: f64) -> Self {
        let metric = RouteMetric::from_minutes(minutes)
            .and_then(|m| m.with_distance_miles(miles))
            .unwrap_or_else(|| panic!("invalid stub metric {minutes} min / {miles} mi"));
        Self::with_metric(metric)
    }

    /// Fail every query with `error`.
    #[must_use]
    pub fn with_error(error: RouteError) -> Self {
        Self::with_response(StubResponse::Error(error))
    }

    /// Fail queries from `origin` to `destination` with `error`.
    ///
    /// Only that direction fails; the reverse pair keeps the default answer.
    #[must_use]
    pub fn failing_on(
        mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        error: RouteError,
    ) -> Self {
        self.overrides
            .insert((origin.into(), destination.into()), error);
        self
    }

    /// Every `(origin, destination)` queried so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }

    /// Number of queries made so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn with_response(response: StubResponse) -> Self {
        Self {
            response,
            overrides: BTreeMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl RouteProvider for StubRouteProvider {
    fn query(&self, origin: &str, destination: &str) -> Result<RouteMetric, RouteError> {
        self.calls
            .borrow_mut()
            .push((origin.to_owned(), destination.to_owned()));
        RouteError::ensure_addresses(origin, destination)?;

        let key = (origin.to_owned(), destination.to_owned());
        if let Some(error) = self.overrides.get(&key) {
            return Err(error.clone());
        }
        match &self.response {
            StubResponse::Metric(metric) => Ok(*metric),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

/// `Pause` that records requested delays without sleeping.
///
/// Clones share the same record, so a test can keep one handle and give the
/// other to the calculator.
#[derive(Debug, Clone, Default)]
pub struct RecordingPause {
    recorded: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingPause {
    /// Delays requested so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<Duration> {
        self.recorded.borrow().clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.recorded.borrow_mut().push(duration);
    }
}
