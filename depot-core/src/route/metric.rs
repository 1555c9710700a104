//! Route measurements normalised to minutes and miles.

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Meters in one statute mile, as used when converting metric distances.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Driving time and, when the provider reports it, driving distance for one
/// directional origin/destination lookup.
///
/// Values are always finite and non-negative; the constructors return `None`
/// for anything else so adapters can report a malformed response.
///
/// # Examples
///
/// ```
/// use depot_core::RouteMetric;
///
/// let metric = RouteMetric::from_seconds(600.0)
///     .and_then(|m| m.with_distance_meters(16_093.4))
///     .expect("valid measurements");
/// assert_eq!(metric.duration_minutes(), 10.0);
/// assert!((metric.distance_miles().unwrap_or_default() - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetric {
    duration_minutes: f64,
    distance_miles: Option<f64>,
}

impl RouteMetric {
    /// Build a duration-only metric already expressed in minutes.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Option<Self> {
        valid(minutes).map(|duration_minutes| Self {
            duration_minutes,
            distance_miles: None,
        })
    }

    /// Build a duration-only metric from a provider duration in seconds.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "unit conversion from seconds to minutes"
    )]
    pub fn from_seconds(seconds: f64) -> Option<Self> {
        valid(seconds).and_then(|secs| Self::from_minutes(secs / SECONDS_PER_MINUTE))
    }

    /// Attach a distance already expressed in miles.
    #[must_use]
    pub fn with_distance_miles(self, miles: f64) -> Option<Self> {
        valid(miles).map(|distance| Self {
            distance_miles: Some(distance),
            ..self
        })
    }

    /// Attach a distance expressed in meters, converting it to miles.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "unit conversion from meters to miles"
    )]
    pub fn with_distance_meters(self, meters: f64) -> Option<Self> {
        valid(meters).and_then(|m| self.with_distance_miles(m / METERS_PER_MILE))
    }

    /// Driving time in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    /// Driving distance in miles, if the provider reported one.
    #[must_use]
    pub const fn distance_miles(&self) -> Option<f64> {
        self.distance_miles
    }
}

fn valid(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}
