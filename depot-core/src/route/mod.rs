//! Query driving time and distance between two addresses.
//!
//! The [`RouteProvider`] trait abstracts a single origin/destination lookup
//! against an external routing service. Implementations normalise the
//! provider's native units into a [`RouteMetric`] measured in minutes and
//! miles, and classify every failure as a [`RouteError`].

mod error;
mod metric;
mod provider;

pub use error::{RouteError, RouteErrorKind};
pub use metric::{METERS_PER_MILE, RouteMetric, SECONDS_PER_MINUTE};
pub use provider::RouteProvider;
