//! Errors raised while reading or writing the depot workbook.

use camino::Utf8PathBuf;
use depot_core::LocationError;
use thiserror::Error;

/// Failure reading locations from, or writing records to, a workbook.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// The workbook could not be opened or parsed.
    #[error("failed to open workbook {path}: {message}")]
    Open {
        /// Workbook path.
        path: Utf8PathBuf,
        /// Reader diagnostic.
        message: String,
    },
    /// The input sheet does not exist.
    #[error("workbook {path} has no sheet named {sheet:?}")]
    MissingSheet {
        /// Workbook path.
        path: Utf8PathBuf,
        /// Expected sheet name.
        sheet: String,
    },
    /// One or more required header cells are absent from row 1.
    #[error("sheet {sheet:?} is missing required column(s): {}", columns.join(", "))]
    MissingColumns {
        /// Sheet that was searched.
        sheet: String,
        /// Headers that were not found.
        columns: Vec<String>,
    },
    /// A data row has one required field filled in and the other blank.
    #[error("sheet {sheet:?} row {row} has a blank designation or address")]
    IncompleteRow {
        /// Sheet containing the row.
        sheet: String,
        /// One-based row number.
        row: u32,
    },
    /// A row passed the blank checks but still failed validation.
    #[error("sheet {sheet:?} row {row}: {source}")]
    InvalidLocation {
        /// Sheet containing the row.
        sheet: String,
        /// One-based row number.
        row: u32,
        /// Validation failure.
        #[source]
        source: LocationError,
    },
    /// The output sheet could not be replaced.
    #[error("failed to replace sheet {sheet:?}: {message}")]
    Sheet {
        /// Output sheet name.
        sheet: String,
        /// Workbook diagnostic.
        message: String,
    },
    /// Writing the workbook back to disk failed.
    #[error("failed to save workbook {path}: {message}")]
    Save {
        /// Workbook path.
        path: Utf8PathBuf,
        /// Writer diagnostic.
        message: String,
    },
}

impl WorkbookError {
    /// Whether the error reflects a mis-shaped workbook rather than an I/O
    /// failure.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingSheet { .. } | Self::MissingColumns { .. } | Self::IncompleteRow { .. }
        )
    }
}
