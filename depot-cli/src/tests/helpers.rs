//! Test helpers for composing depot workbooks and stub providers.

use super::*;
use crate::compute::{ComputeConfig, ProviderBuilder};
use camino::Utf8PathBuf;
use depot_core::RouteProvider;
use depot_core::test_support::StubRouteProvider;
use depot_data::workbook::test_support::{read_sheet, write_workbook};
use depot_data::{ApiCredentials, ProviderKind, WorkbookLayout};
use std::time::Duration;
use tempfile::TempDir;

/// Temporary directory holding a depots workbook.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) workbook: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let workbook = root.join("depots.xlsx");
        Self {
            _dir: dir,
            root,
            workbook,
        }
    }

    /// Write a `Depots` sheet with the standard headers and `rows`.
    pub(super) fn write_depots(&self, rows: &[[&str; 2]]) {
        let sheet = std::iter::once(["Depot Designation", "Depot Address"])
            .chain(rows.iter().copied())
            .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
            .collect();
        write_workbook(&self.workbook, &[("Depots", sheet)]).expect("write depots workbook");
    }

    /// Write a `Depots` sheet that only has a designation column.
    pub(super) fn write_depots_without_address(&self) {
        let sheet = vec![
            vec!["Depot Designation".to_owned()],
            vec!["A".to_owned()],
            vec!["B".to_owned()],
        ];
        write_workbook(&self.workbook, &[("Depots", sheet)]).expect("write depots workbook");
    }

    pub(super) fn write_three_depots(&self) {
        self.write_depots(&[["A", "1 Main St"], ["B", "2 Oak Ave"], ["C", "3 Pine Rd"]]);
    }

    /// Configuration pointing at this workspace with no pause between calls.
    pub(super) fn config(&self) -> ComputeConfig {
        ComputeConfig {
            workbook: self.workbook.clone(),
            limit: None,
            provider: ProviderKind::Google,
            delay: Duration::ZERO,
            timeout: Duration::from_secs(1),
            log_file: self.root.join("depot_distances.log"),
            layout: WorkbookLayout::default(),
        }
    }

    /// Read the output sheet back as rows of cell strings.
    pub(super) fn output_rows(&self) -> Vec<Vec<String>> {
        read_sheet(&self.workbook, "Driving Times")
            .expect("reopen workbook")
            .unwrap_or_default()
    }
}

/// Environment lookup that knows both API keys.
pub(super) fn with_keys(name: &str) -> Option<String> {
    Some(format!("{name}-value"))
}

/// Environment lookup with no API keys at all.
pub(super) fn without_keys(_name: &str) -> Option<String> {
    None
}

/// Provider builder that lends out a shared stub so calls can be counted.
pub(super) struct StubProviderBuilder {
    pub(super) stub: StubRouteProvider,
}

impl StubProviderBuilder {
    pub(super) fn answering() -> Self {
        Self {
            stub: StubRouteProvider::with_minutes_and_miles(5.0, 2.0),
        }
    }
}

impl ProviderBuilder for StubProviderBuilder {
    fn build<'a>(
        &'a self,
        _config: &ComputeConfig,
        _credentials: &ApiCredentials,
    ) -> Result<Box<dyn RouteProvider + 'a>, CliError> {
        Ok(Box::new(&self.stub))
    }
}
