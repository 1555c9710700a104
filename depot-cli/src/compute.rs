//! Compute command: read depots, query every pair, write the matrix back.

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use depot_core::{DEFAULT_PAIR_DELAY, MatrixCalculator, RouteProvider};
use depot_data::{
    ApiCredentials, ProviderKind, WorkbookLayout, build_provider, read_locations, write_records,
};
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::logging::{self, DEFAULT_LOG_FILE};
use crate::{
    ARG_DELAY_MS, ARG_LIMIT, ARG_LOG_FILE, ARG_PROVIDER, ARG_TIMEOUT_SECS, ARG_WORKBOOK, CliError,
    ENV_WORKBOOK,
};

/// Request timeout used when none is configured.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI arguments for the `compute` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read depots from the workbook, query driving time and \
                 distance for every directional pair, and write the results \
                 to a sheet in the same workbook. Settings can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Compute the depot driving-time matrix"
)]
#[ortho_config(prefix = "DEPOT")]
pub(crate) struct ComputeArgs {
    /// Path to the `.xlsx` workbook holding the depots sheet.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) workbook: Option<Utf8PathBuf>,
    /// Stop after this many pairs have been attempted.
    #[arg(long = ARG_LIMIT, value_name = "pairs")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Routing backend to query.
    #[arg(long = ARG_PROVIDER, value_enum)]
    #[serde(default)]
    pub(crate) provider: Option<ProviderKind>,
    /// Pause between consecutive provider calls, in milliseconds.
    #[arg(long = ARG_DELAY_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) delay_ms: Option<u64>,
    /// Per-request network timeout, in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// File that run logs are appended to.
    #[arg(long = ARG_LOG_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) log_file: Option<Utf8PathBuf>,
}

impl ComputeArgs {
    pub(crate) fn into_config(self) -> Result<ComputeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ComputeConfig::try_from(merged)
    }
}

/// Resolved `compute` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComputeConfig {
    /// Workbook read from and written back to.
    pub(crate) workbook: Utf8PathBuf,
    /// Maximum number of pairs to attempt.
    pub(crate) limit: Option<usize>,
    /// Selected routing backend.
    pub(crate) provider: ProviderKind,
    /// Pause after each provider call.
    pub(crate) delay: Duration,
    /// Per-request network timeout.
    pub(crate) timeout: Duration,
    /// Persistent log file.
    pub(crate) log_file: Utf8PathBuf,
    /// Sheet and column names.
    pub(crate) layout: WorkbookLayout,
}

impl ComputeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.workbook;
        match depot_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_WORKBOOK,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_WORKBOOK,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_WORKBOOK,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<ComputeArgs> for ComputeConfig {
    type Error = CliError;

    fn try_from(args: ComputeArgs) -> Result<Self, Self::Error> {
        let workbook = args.workbook.ok_or(CliError::MissingArgument {
            field: ARG_WORKBOOK,
            env: ENV_WORKBOOK,
        })?;
        let delay = args.delay_ms.map_or(DEFAULT_PAIR_DELAY, Duration::from_millis);
        let timeout = Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let log_file = args
            .log_file
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            workbook,
            limit: args.limit,
            provider: args.provider.unwrap_or_default(),
            delay,
            timeout,
            log_file,
            layout: WorkbookLayout::default(),
        })
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ComputeSummary {
    /// Locations read from the workbook.
    pub(crate) locations: usize,
    /// Pairs handed to the provider.
    pub(crate) attempted: usize,
    /// Rows written to the output sheet.
    pub(crate) written: usize,
    /// Pairs dropped after a provider error.
    pub(crate) failed: usize,
}

/// Builds the route provider for the current compute invocation.
pub(crate) trait ProviderBuilder {
    fn build<'a>(
        &'a self,
        config: &ComputeConfig,
        credentials: &ApiCredentials,
    ) -> Result<Box<dyn RouteProvider + 'a>, CliError>;
}

pub(crate) struct DefaultProviderBuilder;

impl ProviderBuilder for DefaultProviderBuilder {
    fn build<'a>(
        &'a self,
        config: &ComputeConfig,
        credentials: &ApiCredentials,
    ) -> Result<Box<dyn RouteProvider + 'a>, CliError> {
        build_provider(config.provider, credentials, config.timeout).map_err(|source| {
            CliError::BuildProvider {
                provider: config.provider,
                source,
            }
        })
    }
}

pub(crate) fn run_compute(args: ComputeArgs) -> Result<(), CliError> {
    let config = resolve_with_logging(args, Utf8Path::new(DEFAULT_LOG_FILE))?;
    let lookup = |name: &str| std::env::var(name).ok();
    run_compute_with(&config, &lookup, &DefaultProviderBuilder).map(|_| ())
}

/// Resolve configuration and install logging against the configured file.
///
/// If either step fails and no logger is active yet, logging is installed
/// against `fallback_log` so the failure still reaches the persistent log.
pub(crate) fn resolve_with_logging(
    args: ComputeArgs,
    fallback_log: &Utf8Path,
) -> Result<ComputeConfig, CliError> {
    let resolved = args.into_config().and_then(|config| {
        logging::init(&config.log_file)?;
        Ok(config)
    });
    if resolved.is_err() && !logging::is_active() {
        // The original error is still reported on stderr if this fails too.
        logging::init(fallback_log).ok();
    }
    resolved
}

/// Run the compute pipeline with injected environment lookup and provider.
///
/// Everything that can fail fatally is checked before the first provider
/// call: the workbook path, both API keys, and the shape of the depots sheet.
pub(crate) fn run_compute_with(
    config: &ComputeConfig,
    lookup: &dyn Fn(&str) -> Option<String>,
    builder: &dyn ProviderBuilder,
) -> Result<ComputeSummary, CliError> {
    config.validate_sources()?;
    let credentials = ApiCredentials::from_lookup(lookup)?;
    let locations =
        read_locations(&config.workbook, &config.layout).map_err(CliError::ReadWorkbook)?;
    if locations.len() < 2 {
        warn!(
            "{} location(s) in {}; at least two are needed to form a pair",
            locations.len(),
            config.workbook
        );
    }

    info!(
        "computing matrix with the {} provider (limit: {})",
        config.provider,
        describe_limit(config.limit)
    );
    let provider = builder.build(config, &credentials)?;
    let run = MatrixCalculator::new(provider)
        .with_delay(config.delay)
        .compute(&locations, config.limit);

    let summary = ComputeSummary {
        locations: locations.len(),
        attempted: run.attempted,
        written: run.records.len(),
        failed: run.failures.len(),
    };
    write_records(&config.workbook, &config.layout, &run.records)
        .map_err(CliError::WriteWorkbook)?;
    info!(
        "done: {} of {} pair(s) written, {} failed",
        summary.written, summary.attempted, summary.failed
    );
    Ok(summary)
}

fn describe_limit(limit: Option<usize>) -> String {
    limit.map_or_else(|| "none".to_owned(), |pairs| pairs.to_string())
}
