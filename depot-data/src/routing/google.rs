//! Google Distance Matrix API adapter.
//!
//! Each query is a one-origin, one-destination matrix request in metric
//! units; the single element's status decides success.
//!
//! See: <https://developers.google.com/maps/documentation/distance-matrix/distance-matrix>

use depot_core::{RouteError, RouteMetric, RouteProvider};
use serde::Deserialize;

use super::transport::{HttpProviderConfig, HttpTransport, ProviderBuildError};
use crate::credentials::ApiKey;

const MATRIX_PATH: &str = "/maps/api/distancematrix/json";
const STATUS_OK: &str = "OK";

/// Distance Matrix response.
#[derive(Debug, Deserialize)]
pub(crate) struct DistanceMatrixResponse {
    /// Request-level status, `"OK"` on success.
    pub(crate) status: String,
    pub(crate) error_message: Option<String>,
    #[serde(default)]
    pub(crate) rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Row {
    #[serde(default)]
    pub(crate) elements: Vec<Element>,
}

/// One origin/destination cell. `status` is `"OK"`, `"NOT_FOUND"`,
/// `"ZERO_RESULTS"` or `"MAX_ROUTE_LENGTH_EXCEEDED"`.
#[derive(Debug, Deserialize)]
pub(crate) struct Element {
    pub(crate) status: String,
    pub(crate) duration: Option<Measure>,
    pub(crate) distance: Option<Measure>,
}

/// Numeric value in native units: seconds for duration, meters for distance.
#[derive(Debug, Deserialize)]
pub(crate) struct Measure {
    pub(crate) value: f64,
}

/// Route provider backed by the Google Distance Matrix API.
#[derive(Debug)]
pub struct GoogleDistanceMatrixProvider {
    transport: HttpTransport,
    key: ApiKey,
}

impl GoogleDistanceMatrixProvider {
    /// Public Google Maps API host.
    pub const DEFAULT_BASE_URL: &'static str = "https://maps.googleapis.com";

    /// Create a provider against the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(key: ApiKey) -> Result<Self, ProviderBuildError> {
        Self::with_config(key, HttpProviderConfig::new(Self::DEFAULT_BASE_URL))
    }

    /// Create a provider with explicit connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(
        key: ApiKey,
        config: HttpProviderConfig,
    ) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            key,
        })
    }

    /// Connection settings in use.
    #[must_use]
    pub const fn config(&self) -> &HttpProviderConfig {
        self.transport.config()
    }
}

impl RouteProvider for GoogleDistanceMatrixProvider {
    fn query(&self, origin: &str, destination: &str) -> Result<RouteMetric, RouteError> {
        RouteError::ensure_addresses(origin, destination)?;
        let query = [
            ("origins", origin),
            ("destinations", destination),
            ("mode", "driving"),
            ("units", "metric"),
            ("key", self.key.expose()),
        ];
        let response: DistanceMatrixResponse = self.transport.get_json(MATRIX_PATH, &query)?;
        convert_response(response)
    }
}

/// Convert a single-element matrix response into minutes and miles.
pub(crate) fn convert_response(
    response: DistanceMatrixResponse,
) -> Result<RouteMetric, RouteError> {
    if response.status != STATUS_OK {
        return Err(RouteError::ServiceError {
            code: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }

    let element = response
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or_else(|| RouteError::ParseError {
            message: "Distance Matrix response missing rows[0].elements[0]".to_owned(),
        })?;

    if element.status != STATUS_OK {
        return Err(RouteError::ServiceError {
            code: element.status,
            message: "could not calculate route".to_owned(),
        });
    }

    let seconds = element
        .duration
        .ok_or_else(|| RouteError::ParseError {
            message: "Distance Matrix element missing duration".to_owned(),
        })?
        .value;
    let metric = RouteMetric::from_seconds(seconds).ok_or_else(|| RouteError::ParseError {
        message: format!("Distance Matrix returned invalid duration {seconds}"),
    })?;

    match element.distance {
        None => Ok(metric),
        Some(Measure { value: meters }) => {
            metric
                .with_distance_meters(meters)
                .ok_or_else(|| RouteError::ParseError {
                    message: format!("Distance Matrix returned invalid distance {meters}"),
                })
        }
    }
}
