//! Sequential, rate-limited matrix calculator.

use std::fmt;
use std::time::Duration;

use log::{debug, error, info};

use crate::{Location, OutputRecord, RouteProvider};

use super::{
    MatrixRun, OrderedPair, PairFailure, PairOutcome, Pause, ThreadSleep, ordered_pair_count,
    ordered_pairs,
};

/// Delay inserted after every pair attempt unless overridden.
pub const DEFAULT_PAIR_DELAY: Duration = Duration::from_millis(200);

/// Compute driving metrics for every ordered pair of locations.
///
/// Pairs are processed one at a time in [`ordered_pairs`] order. Each
/// provider call blocks until it returns, after which the calculator pauses
/// for a fixed delay, whether the call succeeded or not. A failing pair is
/// logged and skipped; nothing a single pair does can abort the run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use depot_core::{Location, MatrixCalculator, RouteError, RouteMetric, RouteProvider};
///
/// struct FiveMinutes;
///
/// impl RouteProvider for FiveMinutes {
///     fn query(&self, _: &str, _: &str) -> Result<RouteMetric, RouteError> {
///         RouteMetric::from_minutes(5.0).ok_or(RouteError::ParseError {
///             message: "invalid".to_owned(),
///         })
///     }
/// }
///
/// # fn main() -> Result<(), depot_core::LocationError> {
/// let depots = [
///     Location::new("A", "1 Main St")?,
///     Location::new("B", "2 Oak Ave")?,
/// ];
/// let calculator = MatrixCalculator::new(FiveMinutes).with_delay(Duration::ZERO);
/// let records = calculator.compute_matrix(&depots, None);
/// assert_eq!(records.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct MatrixCalculator<P> {
    provider: P,
    delay: Duration,
    pause: Box<dyn Pause>,
}

impl<P: fmt::Debug> fmt::Debug for MatrixCalculator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixCalculator")
            .field("provider", &self.provider)
            .field("delay", &self.delay)
            .field("pause", &"<dyn Pause>")
            .finish()
    }
}

impl<P: RouteProvider> MatrixCalculator<P> {
    /// Create a calculator that sleeps [`DEFAULT_PAIR_DELAY`] between calls.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            delay: DEFAULT_PAIR_DELAY,
            pause: Box::new(ThreadSleep),
        }
    }

    /// Set the delay inserted after every pair attempt.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the pacing implementation.
    #[must_use]
    pub fn with_pause(mut self, pause: impl Pause + 'static) -> Self {
        self.pause = Box::new(pause);
        self
    }

    /// The provider queried for each pair.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The delay inserted after every pair attempt.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Compute the matrix and return only the successful rows.
    ///
    /// At most `limit` pairs are attempted when a limit is given; otherwise
    /// all `n * (n - 1)` pairs are. The result is empty, not an error, when
    /// fewer than two locations are supplied or every pair fails.
    #[must_use]
    pub fn compute_matrix(
        &self,
        locations: &[Location],
        limit: Option<usize>,
    ) -> Vec<OutputRecord> {
        self.compute(locations, limit).into_records()
    }

    /// Compute the matrix and report successes and failures separately.
    #[must_use]
    pub fn compute(&self, locations: &[Location], limit: Option<usize>) -> MatrixRun {
        let total = ordered_pair_count(locations.len());
        let planned = limit.map_or(total, |cap| cap.min(total));
        if let Some(cap) = limit {
            info!("limiting run to the first {cap} of {total} depot pairs");
        }
        info!(
            "computing driving metrics for {planned} ordered pairs across {} locations",
            locations.len()
        );

        let mut run = MatrixRun::default();
        for (pair, origin, destination) in resolve_pairs(locations).take(planned) {
            let outcome = self.process_pair(pair, origin, destination);
            if let PairOutcome::Failure(failure) = &outcome {
                error!(
                    "error calculating route between {} and {}: {}",
                    failure.origin_designation, failure.destination_designation, failure.error
                );
            }
            run.push(outcome);
            self.pause.pause(self.delay);
        }

        info!(
            "matrix complete: {} of {} pairs succeeded, {} failed",
            run.records.len(),
            run.attempted,
            run.failures.len()
        );
        run
    }

    /// Query the provider for a single pair and shape the outcome.
    ///
    /// Does not pause; pacing is applied by [`MatrixCalculator::compute`].
    #[must_use]
    pub fn process_pair(
        &self,
        pair: OrderedPair,
        origin: &Location,
        destination: &Location,
    ) -> PairOutcome {
        match self.provider.query(origin.address(), destination.address()) {
            Ok(metric) => {
                debug!(
                    "{} -> {}: {:.2} min",
                    origin.designation(),
                    destination.designation(),
                    metric.duration_minutes()
                );
                PairOutcome::Success(OutputRecord::assemble(origin, destination, metric))
            }
            Err(error) => PairOutcome::Failure(PairFailure {
                pair,
                origin_designation: origin.designation().to_owned(),
                destination_designation: destination.designation().to_owned(),
                error,
            }),
        }
    }
}

/// Pair indices resolved to the locations they refer to.
fn resolve_pairs(
    locations: &[Location],
) -> impl Iterator<Item = (OrderedPair, &Location, &Location)> {
    ordered_pairs(locations.len()).filter_map(move |pair| {
        let origin = locations.get(pair.origin)?;
        let destination = locations.get(pair.destination)?;
        Some((pair, origin, destination))
    })
}
