//! Provider selection, fixed once per run.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use depot_core::RouteProvider;
use serde::{Deserialize, Serialize};

use super::transport::{HttpProviderConfig, ProviderBuildError};
use super::{GoogleDistanceMatrixProvider, MapQuestProvider};
use crate::credentials::ApiCredentials;

/// Routing backend to query.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// MapQuest Directions API.
    #[value(name = "mapquest")]
    MapQuest,
    /// Google Distance Matrix API.
    #[default]
    Google,
}

impl ProviderKind {
    /// Name used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MapQuest => "mapquest",
            Self::Google => "google",
        }
    }

    /// Public API host for this backend.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::MapQuest => MapQuestProvider::DEFAULT_BASE_URL,
            Self::Google => GoogleDistanceMatrixProvider::DEFAULT_BASE_URL,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised provider name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported provider {0:?}; choose \"mapquest\" or \"google\"")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mapquest" => Ok(Self::MapQuest),
            "google" => Ok(Self::Google),
            _ => Err(UnknownProvider(value.to_owned())),
        }
    }
}

/// Build the provider for `kind` against its public API.
///
/// # Errors
///
/// Returns an error if the HTTP client or Tokio runtime fails to build.
pub fn build_provider(
    kind: ProviderKind,
    credentials: &ApiCredentials,
    timeout: Duration,
) -> Result<Box<dyn RouteProvider>, ProviderBuildError> {
    let config = HttpProviderConfig::new(kind.default_base_url()).with_timeout(timeout);
    let key = credentials.key_for(kind).clone();
    Ok(match kind {
        ProviderKind::MapQuest => Box::new(MapQuestProvider::with_config(key, config)?),
        ProviderKind::Google => Box::new(GoogleDistanceMatrixProvider::with_config(key, config)?),
    })
}
