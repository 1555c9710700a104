use thiserror::Error;

/// Errors from [`crate::route::RouteProvider::query`].
///
/// Every variant is isolated to the pair that produced it; the matrix
/// calculator logs the error and moves on to the next pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The origin or destination address was blank.
    #[error("origin and destination addresses must not be blank")]
    EmptyAddress,

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was queried, without query parameters.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// Endpoint that was queried, without query parameters.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail reported by the HTTP client.
        message: String,
    },

    /// The request failed before a response arrived.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// Endpoint that was queried, without query parameters.
        url: String,
        /// Error detail reported by the HTTP client.
        message: String,
    },

    /// The provider responded but reported a routing failure in its payload,
    /// e.g. no route found or a rejected key.
    #[error("routing service returned {code}: {message}")]
    ServiceError {
        /// Provider status code, as text.
        code: String,
        /// Human-readable detail, empty when the provider sent none.
        message: String,
    },

    /// The response did not have the expected shape.
    #[error("malformed routing response: {message}")]
    ParseError {
        /// What was missing or invalid.
        message: String,
    },
}

/// Coarse classification of a [`RouteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteErrorKind {
    /// Timeout, network failure, or non-2xx HTTP status.
    Transport,
    /// The provider signalled a routing failure in a well-formed response.
    ProviderSemantic,
    /// The response payload was missing expected fields.
    MalformedResponse,
    /// The query was rejected before contacting the provider.
    InvalidInput,
}

impl RouteError {
    /// Reject blank origin or destination addresses.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyAddress`] when either address is blank.
    pub fn ensure_addresses(origin: &str, destination: &str) -> Result<(), Self> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(Self::EmptyAddress);
        }
        Ok(())
    }

    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> RouteErrorKind {
        match self {
            Self::Timeout { .. } | Self::HttpError { .. } | Self::NetworkError { .. } => {
                RouteErrorKind::Transport
            }
            Self::ServiceError { .. } => RouteErrorKind::ProviderSemantic,
            Self::ParseError { .. } => RouteErrorKind::MalformedResponse,
            Self::EmptyAddress => RouteErrorKind::InvalidInput,
        }
    }
}
