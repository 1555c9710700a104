//! Routing provider trait for single origin/destination lookups.

use super::{RouteError, RouteMetric};

/// Fetch the driving metric for one directional address pair.
///
/// Implementations make exactly one attempt per call: no retries, no caching
/// and no shared mutable state. Blank addresses must be rejected with
/// [`RouteError::EmptyAddress`] before any network traffic.
///
/// # Examples
///
/// ```rust
/// use depot_core::{RouteError, RouteMetric, RouteProvider};
///
/// struct FixedProvider;
///
/// impl RouteProvider for FixedProvider {
///     fn query(&self, origin: &str, destination: &str) -> Result<RouteMetric, RouteError> {
///         RouteError::ensure_addresses(origin, destination)?;
///         RouteMetric::from_seconds(300.0).ok_or(RouteError::ParseError {
///             message: "invalid duration".to_owned(),
///         })
///     }
/// }
///
/// let metric = FixedProvider.query("1 Main St", "2 Oak Ave")?;
/// assert_eq!(metric.duration_minutes(), 5.0);
/// # Ok::<(), RouteError>(())
/// ```
pub trait RouteProvider {
    /// Return the driving metric from `origin` to `destination`.
    fn query(&self, origin: &str, destination: &str) -> Result<RouteMetric, RouteError>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for &P {
    fn query(&self, origin: &str, destination: &str) -> Result<RouteMetric, RouteError> {
        (**self).query(origin, destination)
    }
}

impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    fn query(&self, origin: &str, destination: &str) -> Result<RouteMetric, RouteError> {
        (**self).query(origin, destination)
    }
}

