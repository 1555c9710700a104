//! Adapters between the depot matrix core and the outside world.
//!
//! - [`routing`]: HTTP route providers (MapQuest Directions, Google Distance
//!   Matrix) and provider selection.
//! - [`credentials`]: API keys loaded from the environment.
//! - [`workbook`]: reading depots from, and writing the matrix back to, an
//!   `.xlsx` workbook.
#![forbid(unsafe_code)]

pub mod credentials;
pub mod routing;
pub mod workbook;

pub use credentials::{ApiCredentials, ApiKey, CredentialsError};
pub use routing::{ProviderBuildError, ProviderKind, build_provider};
pub use workbook::{WorkbookError, WorkbookLayout, read_locations, write_records};
