//! MapQuest Directions API adapter.
//!
//! See: <https://developer.mapquest.com/documentation/api/directions/route/get/>

use depot_core::{RouteError, RouteMetric, RouteProvider};
use serde::Deserialize;

use super::transport::{HttpProviderConfig, HttpTransport, ProviderBuildError};
use crate::credentials::ApiKey;

const ROUTE_PATH: &str = "/directions/v2/route";

/// Directions response, reduced to the fields the adapter reads.
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    pub(crate) info: Option<Info>,
    pub(crate) route: Option<Route>,
}

/// Request status block. `statuscode` is `0` on success.
#[derive(Debug, Deserialize)]
pub(crate) struct Info {
    pub(crate) statuscode: Option<i64>,
    #[serde(default)]
    pub(crate) messages: Vec<String>,
}

/// Route summary: `time` in seconds, `distance` in the requested unit.
#[derive(Debug, Deserialize)]
pub(crate) struct Route {
    pub(crate) time: Option<f64>,
    pub(crate) distance: Option<f64>,
}

/// Route provider backed by the MapQuest Directions API.
///
/// Requests the fastest route with distances in miles and every optional
/// payload (narrative, shape, reverse geocoding) switched off.
#[derive(Debug)]
pub struct MapQuestProvider {
    transport: HttpTransport,
    key: ApiKey,
}

impl MapQuestProvider {
    /// Public MapQuest API host.
    pub const DEFAULT_BASE_URL: &'static str = "http://www.mapquestapi.com";

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

impl RouteProvider for MapQuestProvider {
    fn query(&self, origin: &str, destination: &str) -> Result<RouteMetric, RouteError> {
        RouteError::ensure_addresses(origin, destination)?;
        let query = [
            ("key", self.key.expose()),
            ("from", origin),
            ("to", destination),
            ("unit", "m"),
            ("routeType", "fastest"),
            ("doReverseGeocode", "false"),
            ("narrativeType", "none"),
            ("enhanced", "false"),
            ("fullShape", "false"),
        ];
        let response: DirectionsResponse = self.transport.get_json(ROUTE_PATH, &query)?;
        convert_response(response)
    }
}

/// Convert a directions response into minutes and miles.
pub(crate) fn convert_response(response: DirectionsResponse) -> Result<RouteMetric, RouteError> {
    let info = response.info.ok_or_else(|| RouteError::ParseError {
        message: "MapQuest response missing info block".to_owned(),
    })?;
    let status = info.statuscode.ok_or_else(|| RouteError::ParseError {
        message: "MapQuest response missing info.statuscode".to_owned(),
    })?;
    if status != 0 {
        return Err(RouteError::ServiceError {
            code: status.to_string(),
            message: info.messages.join("; "),
        });
    }

    let route = response.route.ok_or_else(|| RouteError::ParseError {
        message: "MapQuest response missing route".to_owned(),
    })?;
    let seconds = route.time.ok_or_else(|| RouteError::ParseError {
        message: "MapQuest response missing route.time".to_owned(),
    })?;
    let metric = RouteMetric::from_seconds(seconds).ok_or_else(|| RouteError::ParseError {
        message: format!("MapQuest returned invalid route.time {seconds}"),
    })?;

    match route.distance {
        None => Ok(metric),
        Some(miles) => metric
            .with_distance_miles(miles)
            .ok_or_else(|| RouteError::ParseError {
                message: format!("MapQuest returned invalid route.distance {miles}"),
            }),
    }
}
