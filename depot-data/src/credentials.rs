//! Provider API keys supplied through the process environment.
//!
//! Keys are loaded once at start-up and handed to provider constructors; the
//! core never reads the environment itself.

use std::fmt;

use thiserror::Error;

use crate::routing::ProviderKind;

/// Environment variable holding the MapQuest key.
pub const MAPQUEST_API_KEY_VAR: &str = "MAPQUEST_API_KEY";

/// Environment variable holding the Google Maps key.
pub const GOOGLE_MAPS_API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// A secret API key. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw key, for placing into a request.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Errors raised while loading credentials. Always fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    /// A required key was unset or blank.
    #[error("{variable} environment variable is not set")]
    MissingKey {
        /// Name of the missing environment variable.
        variable: &'static str,
    },
}

/// Keys for every supported provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    /// MapQuest Directions API key.
    pub mapquest: ApiKey,
    /// Google Maps Distance Matrix API key.
    pub google: ApiKey,
}

impl ApiCredentials {
    /// Load both keys from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::MissingKey`] for the first key that is
    /// unset or blank.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load both keys through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::MissingKey`] for the first key that is
    /// unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mapquest = required(&lookup, MAPQUEST_API_KEY_VAR)?;
        let google = required(&lookup, GOOGLE_MAPS_API_KEY_VAR)?;
        Ok(Self { mapquest, google })
    }

    /// The key used by `kind`.
    #[must_use]
    pub const fn key_for(&self, kind: ProviderKind) -> &ApiKey {
        match kind {
            ProviderKind::MapQuest => &self.mapquest,
            ProviderKind::Google => &self.google,
        }
    }
}

fn required<F>(lookup: &F, variable: &'static str) -> Result<ApiKey, CredentialsError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(variable)
        .filter(|value| !value.trim().is_empty())
        .map(ApiKey::new)
        .ok_or(CredentialsError::MissingKey { variable })
}
