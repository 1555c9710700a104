//! Error types emitted by the depot matrix CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use depot_data::routing::ProviderBuildError;
use depot_data::{CredentialsError, ProviderKind, WorkbookError};
use thiserror::Error;

/// Errors emitted by the depot matrix CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass <{field}> or set {env})")]
    MissingArgument {
        /// Argument name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// An API key is missing from the environment.
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    /// Reading locations from the workbook failed.
    #[error("failed to read depots: {0}")]
    ReadWorkbook(#[source] WorkbookError),
    /// Writing the matrix back to the workbook failed.
    #[error("failed to write driving times: {0}")]
    WriteWorkbook(#[source] WorkbookError),
    /// Constructing the route provider failed.
    #[error("failed to build {provider} route provider: {source}")]
    BuildProvider {
        /// Requested backend.
        provider: ProviderKind,
        /// Underlying failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The log file could not be opened.
    #[error("failed to open log file {path:?}: {source}")]
    OpenLogFile {
        /// Log file path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A global logger was already installed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[from] log::SetLoggerError),
}
