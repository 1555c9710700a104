//! Blocking JSON-over-HTTP transport shared by the route providers.
//!
//! The transport owns a `reqwest` client and a current-thread Tokio runtime.
//! Requests are issued asynchronously and bridged to the synchronous
//! [`RouteProvider`](depot_core::RouteProvider) interface by blocking on
//! that runtime.

use std::time::Duration;

use depot_core::RouteError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Error type for provider construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default user agent for provider requests.
pub const DEFAULT_USER_AGENT: &str = "depot-matrix/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for an HTTP route provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProviderConfig {
    /// Scheme and host of the provider API, e.g. `"https://maps.googleapis.com"`.
    pub base_url: String,
    /// Per-request timeout. Bounds how long one stalled pair can block a run.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpProviderConfig {
    /// Create a configuration for `base_url` with default timeout and user
    /// agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Blocking JSON GET client.
pub(super) struct HttpTransport {
    client: Client,
    config: HttpProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpTransport {
    pub(super) fn new(config: HttpProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    pub(super) const fn config(&self) -> &HttpProviderConfig {
        &self.config
    }

    /// Join the base URL and `path`, tolerating a trailing slash on the base.
    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET `path` with `query` and decode the JSON body, blocking until done.
    ///
    /// When called from within a multi-threaded Tokio runtime the request is
    /// driven on that runtime via [`tokio::task::block_in_place`]; otherwise
    /// the transport's own runtime is used.
    pub(super) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RouteError> {
        let future = self.get_json_async(path, query);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }

    async fn get_json_async<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RouteError> {
        // Error values only ever carry the endpoint; the query holds the key.
        let url = self.endpoint(path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &url))?;

        response
            .json()
            .await
            .map_err(|err| RouteError::ParseError {
                message: describe(err),
            })
    }

    /// Convert a reqwest error to a `RouteError`.
    fn convert_reqwest_error(&self, error: reqwest::Error, url: &str) -> RouteError {
        if error.is_timeout() {
            return RouteError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return RouteError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: describe(error),
            };
        }

        RouteError::NetworkError {
            url: url.to_owned(),
            message: describe(error),
        }
    }
}

/// Render a reqwest error and its causes without the request URL, which
/// carries the API key.
fn describe(error: reqwest::Error) -> String {
    let stripped = error.without_url();
    let mut message = stripped.to_string();
    let mut source = std::error::Error::source(&stripped);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
