//! Core domain types for depot driving-time matrices.
//!
//! The crate turns an ordered collection of [`Location`] values into a
//! best-effort matrix of [`OutputRecord`] rows by querying a
//! [`RouteProvider`] once per ordered pair. Provider adapters live in
//! `depot-data`; this crate stays free of network and spreadsheet code so the
//! calculator can be exercised with stub providers.
#![forbid(unsafe_code)]

mod location;
pub mod matrix;
mod record;
pub mod route;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use location::{Location, LocationError};
pub use matrix::{
    DEFAULT_PAIR_DELAY, MatrixCalculator, MatrixRun, OrderedPair, PairFailure, PairOutcome, Pause,
    ThreadSleep, ordered_pairs,
};
pub use record::OutputRecord;
pub use route::{RouteError, RouteErrorKind, RouteMetric, RouteProvider};
