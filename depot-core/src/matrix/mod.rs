//! Best-effort pairwise driving matrices.
//!
//! [`MatrixCalculator`] walks every ordered pair of locations produced by
//! [`ordered_pairs`], queries its [`RouteProvider`](crate::RouteProvider)
//! once per pair, and pauses for a fixed delay after each attempt. Each
//! attempt yields a [`PairOutcome`]; failures are logged and left out of the
//! resulting records instead of aborting the run.

mod calculator;
mod outcome;
mod pairs;
mod pause;

pub use calculator::{DEFAULT_PAIR_DELAY, MatrixCalculator};
pub use outcome::{MatrixRun, PairFailure, PairOutcome};
pub use pairs::{OrderedPair, ordered_pair_count, ordered_pairs};
pub use pause::{Pause, ThreadSleep};
