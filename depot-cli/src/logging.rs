//! Process logging to standard error and an append-mode log file.

use std::io::{self, Write};

use camino::Utf8Path;
use env_logger::{Builder, Env, Target, WriteStyle};
use log::LevelFilter;

use crate::CliError;

/// Log file used when none is configured.
pub(crate) const DEFAULT_LOG_FILE: &str = "depot_distances.log";

/// Writer that duplicates every write to two sinks.
pub(crate) struct Tee<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> Tee<A, B> {
    pub(crate) const fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.secondary.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

/// Whether a logger has been installed and lets error records through.
pub(crate) fn is_active() -> bool {
    log::max_level() != LevelFilter::Off
}

/// Install the global logger, writing to stderr and appending to `log_file`.
///
/// The filter defaults to `info` and honours `RUST_LOG`.
pub(crate) fn init(log_file: &Utf8Path) -> Result<(), CliError> {
    let file = depot_fs::open_append_file(log_file).map_err(|source| CliError::OpenLogFile {
        path: log_file.to_owned(),
        source,
    })?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(Tee::new(io::stderr(), file))))
        .write_style(WriteStyle::Never)
        .format_module_path(true)
        .try_init()?;
    Ok(())
}
