//! Facade crate for the depot driving-time matrix.
//!
//! This crate re-exports the core domain types and exposes the HTTP route
//! providers and workbook collaborator behind the `providers` feature.

#![forbid(unsafe_code)]

pub use depot_core::{
    DEFAULT_PAIR_DELAY, Location, LocationError, MatrixCalculator, MatrixRun, OrderedPair,
    OutputRecord, PairFailure, PairOutcome, Pause, RouteError, RouteErrorKind, RouteMetric,
    RouteProvider, ThreadSleep, ordered_pairs,
};

#[cfg(feature = "test-support")]
pub use depot_core::test_support;

#[cfg(feature = "providers")]
pub use depot_data::{
    ApiCredentials, ApiKey, CredentialsError, ProviderBuildError, ProviderKind, WorkbookError,
    WorkbookLayout, build_provider, read_locations, write_records,
};
