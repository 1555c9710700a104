//! Output rows combining a pair's identifying fields with its route metric.

use crate::{Location, RouteMetric};

/// One row of the driving-time matrix.
///
/// Field order matches the column order of the written table; see
/// [`OutputRecord::HEADERS`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputRecord {
    /// Designation of the origin depot.
    pub origin_designation: String,
    /// Address of the origin depot.
    pub origin_address: String,
    /// Designation of the destination depot.
    pub destination_designation: String,
    /// Address of the destination depot.
    pub destination_address: String,
    /// Driving time in minutes.
    pub duration_minutes: f64,
    /// Driving distance in miles, when the provider reports one.
    pub distance_miles: Option<f64>,
}

impl OutputRecord {
    /// Column titles, in field order.
    pub const HEADERS: [&'static str; 6] = [
        "Depot 1 Designation",
        "Depot 1 Address",
        "Depot 2 Designation",
        "Depot 2 Address",
        "Driving Time (minutes)",
        "Driving Distance (miles)",
    ];

    /// Flatten an origin, a destination and their route metric into a row.
    #[must_use]
    pub fn assemble(origin: &Location, destination: &Location, metric: RouteMetric) -> Self {
        Self {
            origin_designation: origin.designation().to_owned(),
            origin_address: origin.address().to_owned(),
            destination_designation: destination.designation().to_owned(),
            destination_address: destination.address().to_owned(),
            duration_minutes: metric.duration_minutes(),
            distance_miles: metric.distance_miles(),
        }
    }
}
