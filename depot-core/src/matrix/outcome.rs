//! Per-pair results and the aggregate of one matrix run.

use std::fmt;

use crate::{OutputRecord, RouteError};

use super::OrderedPair;

/// Result of attempting a single ordered pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    /// The provider answered; the row is ready for output.
    Success(OutputRecord),
    /// The provider failed; the pair is left out of the output.
    Failure(PairFailure),
}

/// A pair whose provider lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairFailure {
    /// Indices of the failed pair.
    pub pair: OrderedPair,
    /// Designation of the origin depot.
    pub origin_designation: String,
    /// Designation of the destination depot.
    pub destination_designation: String,
    /// Why the lookup failed.
    pub error: RouteError,
}

impl fmt::Display for PairFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {}",
            self.origin_designation, self.destination_designation, self.error
        )
    }
}

/// Everything one matrix run produced.
///
/// `records` holds the successful rows in enumeration order; failed pairs
/// appear only in `failures`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixRun {
    /// Successful rows, in pair enumeration order.
    pub records: Vec<OutputRecord>,
    /// Pairs that failed, in pair enumeration order.
    pub failures: Vec<PairFailure>,
    /// Number of pairs attempted, after applying any limit.
    pub attempted: usize,
}

impl MatrixRun {
    /// Fold one pair outcome into the run.
    pub fn push(&mut self, outcome: PairOutcome) {
        self.attempted = self.attempted.saturating_add(1);
        match outcome {
            PairOutcome::Success(record) => self.records.push(record),
            PairOutcome::Failure(failure) => self.failures.push(failure),
        }
    }

    /// Whether any attempted pair failed.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Consume the run, keeping only the successful rows.
    #[must_use]
    pub fn into_records(self) -> Vec<OutputRecord> {
        self.records
    }
}
