//! HTTP route providers for external mapping services.
//!
//! This module provides two implementations of
//! [`depot_core::RouteProvider`]:
//!
//! - [`MapQuestProvider`] queries the MapQuest Directions API, which reports
//!   duration in seconds and distance in miles.
//! - [`GoogleDistanceMatrixProvider`] queries the Google Distance Matrix API
//!   with a single origin and destination, which reports duration in seconds
//!   and distance in meters.
//!
//! # Architecture
//!
//! The [`RouteProvider`](depot_core::RouteProvider) trait is synchronous so
//! the matrix calculator can stay a plain sequential loop. Both providers
//! share an HTTP transport that blocks on an owned Tokio runtime, or on the
//! caller's multi-threaded runtime when one is active.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use depot_core::RouteProvider;
//! use depot_data::credentials::ApiKey;
//! use depot_data::routing::{HttpProviderConfig, MapQuestProvider};
//!
//! let config = HttpProviderConfig::new(MapQuestProvider::DEFAULT_BASE_URL)
//!     .with_timeout(Duration::from_secs(10));
//! let provider = MapQuestProvider::with_config(ApiKey::new("key"), config)?;
//!
//! let metric = provider.query("1 Main St, Springfield", "2 Oak Ave, Springfield")?;
//! println!("{:.1} minutes", metric.duration_minutes());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod google;
mod mapquest;
mod select;
mod transport;

pub use google::GoogleDistanceMatrixProvider;
pub use mapquest::MapQuestProvider;
pub use select::{ProviderKind, UnknownProvider, build_provider};
pub use transport::{DEFAULT_USER_AGENT, HttpProviderConfig, ProviderBuildError};
