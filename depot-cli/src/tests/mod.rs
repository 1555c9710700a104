//! Shared test harness modules for the depot matrix CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod compute_unit;
mod helpers;
