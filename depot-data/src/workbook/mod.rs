//! `.xlsx` workbook collaborator.
//!
//! Locations are read from a named sheet whose first row holds column
//! headers. Results are written to a second sheet in the same file, which is
//! dropped and recreated on every run.

mod error;
#[doc(hidden)]
pub mod test_support;

use camino::Utf8Path;
use depot_core::{Location, OutputRecord};
use log::{debug, info};
use umya_spreadsheet::{Spreadsheet, Worksheet, reader, writer};

pub use error::WorkbookError;

/// Sheet and column names used to locate depots and place results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookLayout {
    /// Sheet listing the depots.
    pub input_sheet: String,
    /// Sheet receiving the driving-time matrix.
    pub output_sheet: String,
    /// Header of the designation column.
    pub designation_column: String,
    /// Header of the address column.
    pub address_column: String,
}

impl Default for WorkbookLayout {
    fn default() -> Self {
        Self {
            input_sheet: "Depots".to_owned(),
            output_sheet: "Driving Times".to_owned(),
            designation_column: "Depot Designation".to_owned(),
            address_column: "Depot Address".to_owned(),
        }
    }
}

/// Read depot locations from `layout.input_sheet`, in row order.
///
/// Fully blank rows are skipped.
///
/// # Errors
///
/// Returns [`WorkbookError::Open`] if the file cannot be parsed,
/// [`WorkbookError::MissingSheet`] or [`WorkbookError::MissingColumns`] if
/// the sheet is not shaped as expected, and [`WorkbookError::IncompleteRow`]
/// for a row with only one of the two fields filled in.
pub fn read_locations(
    path: &Utf8Path,
    layout: &WorkbookLayout,
) -> Result<Vec<Location>, WorkbookError> {
    let book = open(path)?;
    let sheet = book
        .get_sheet_by_name(&layout.input_sheet)
        .ok_or_else(|| WorkbookError::MissingSheet {
            path: path.to_owned(),
            sheet: layout.input_sheet.clone(),
        })?;

    let (designation_col, address_col) = locate_columns(sheet, layout)?;
    let mut locations = Vec::new();
    for row in 2..=sheet.get_highest_row() {
        let designation = sheet.get_value((designation_col, row));
        let address = sheet.get_value((address_col, row));
        match (designation.trim().is_empty(), address.trim().is_empty()) {
            (true, true) => {
                debug!("skipping blank row {row} of {:?}", layout.input_sheet);
            }
            (false, false) => {
                let location = Location::new(designation, address).map_err(
                    |source| WorkbookError::InvalidLocation {
                        sheet: layout.input_sheet.clone(),
                        row,
                        source,
                    },
                )?;
                locations.push(location);
            }
            _ => {
                return Err(WorkbookError::IncompleteRow {
                    sheet: layout.input_sheet.clone(),
                    row,
                });
            }
        }
    }

    info!(
        "read {} location(s) from sheet {:?} of {path}",
        locations.len(),
        layout.input_sheet
    );
    Ok(locations)
}

/// Replace `layout.output_sheet` with `records` and save the workbook in
/// place.
///
/// The sheet gets the [`OutputRecord::HEADERS`] row followed by one row per
/// record. A record without a distance leaves that cell empty.
///
/// # Errors
///
/// Returns [`WorkbookError::Open`] if the file cannot be re-read,
/// [`WorkbookError::Sheet`] if the output sheet cannot be replaced, and
/// [`WorkbookError::Save`] if writing fails.
pub fn write_records(
    path: &Utf8Path,
    layout: &WorkbookLayout,
    records: &[OutputRecord],
) -> Result<(), WorkbookError> {
    let mut book = open(path)?;
    let sheet_error = |message: &str| WorkbookError::Sheet {
        sheet: layout.output_sheet.clone(),
        message: message.to_owned(),
    };

    if book.get_sheet_by_name(&layout.output_sheet).is_some() {
        debug!("removing existing sheet {:?}", layout.output_sheet);
        book.remove_sheet_by_name(&layout.output_sheet)
            .map_err(sheet_error)?;
    }
    let sheet = book
        .new_sheet(layout.output_sheet.as_str())
        .map_err(sheet_error)?;

    for (col, header) in (1u32..).zip(OutputRecord::HEADERS) {
        sheet.get_cell_mut((col, 1)).set_value(header);
    }
    for (row, record) in (2u32..).zip(records) {
        fill_row(sheet, row, record);
    }

    writer::xlsx::write(&book, path).map_err(|err| WorkbookError::Save {
        path: path.to_owned(),
        message: err.to_string(),
    })?;
    info!(
        "wrote {} record(s) to sheet {:?} of {path}",
        records.len(),
        layout.output_sheet
    );
    Ok(())
}

fn open(path: &Utf8Path) -> Result<Spreadsheet, WorkbookError> {
    reader::xlsx::read(path).map_err(|err| WorkbookError::Open {
        path: path.to_owned(),
        message: err.to_string(),
    })
}

/// Find the one-based column indices of the designation and address headers.
fn locate_columns(
    sheet: &Worksheet,
    layout: &WorkbookLayout,
) -> Result<(u32, u32), WorkbookError> {
    let find = |header: &str| {
        (1..=sheet.get_highest_column()).find(|&col| sheet.get_value((col, 1)).trim() == header)
    };
    match (
        find(&layout.designation_column),
        find(&layout.address_column),
    ) {
        (Some(designation), Some(address)) => Ok((designation, address)),
        (designation, address) => {
            let columns = [
                (designation, &layout.designation_column),
                (address, &layout.address_column),
            ]
            .into_iter()
            .filter(|(found, _)| found.is_none())
            .map(|(_, name)| name.clone())
            .collect();
            Err(WorkbookError::MissingColumns {
                sheet: layout.input_sheet.clone(),
                columns,
            })
        }
    }
}

fn fill_row(sheet: &mut Worksheet, row: u32, record: &OutputRecord) {
    sheet
        .get_cell_mut((1, row))
        .set_value(record.origin_designation.as_str());
    sheet
        .get_cell_mut((2, row))
        .set_value(record.origin_address.as_str());
    sheet
        .get_cell_mut((3, row))
        .set_value(record.destination_designation.as_str());
    sheet
        .get_cell_mut((4, row))
        .set_value(record.destination_address.as_str());
    sheet
        .get_cell_mut((5, row))
        .set_value_number(record.duration_minutes);
    if let Some(miles) = record.distance_miles {
        sheet.get_cell_mut((6, row)).set_value_number(miles);
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::write_workbook;
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Scratch {
        _dir: TempDir,
        path: Utf8PathBuf,
    }

    #[fixture]
    fn scratch() -> Scratch {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("depots.xlsx"))
            .expect("utf-8 temp path");
        Scratch { _dir: dir, path }
    }

    fn depots_sheet(rows: &[[&str; 2]]) -> Vec<Vec<String>> {
        std::iter::once(["Depot Designation", "Depot Address"])
            .chain(rows.iter().copied())
            .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
            .collect()
    }

    #[rstest]
    fn reads_locations_in_row_order(scratch: Scratch) {
        let rows = depots_sheet(&[["A", "1 Main St"], ["B", "2 Oak Ave"]]);
        write_workbook(&scratch.path, &[("Depots", rows)]).expect("write fixture");

        let locations =
            read_locations(&scratch.path, &WorkbookLayout::default()).expect("should read");

        let names: Vec<_> = locations.iter().map(Location::designation).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(
            locations.get(1).map(Location::address),
            Some("2 Oak Ave")
        );
    }

    #[rstest]
    fn finds_columns_in_any_position(scratch: Scratch) {
        let rows = vec![
            vec!["Notes".to_owned(), "Depot Address".to_owned(), "Depot Designation".to_owned()],
            vec!["x".to_owned(), "1 Main St".to_owned(), "A".to_owned()],
        ];
        write_workbook(&scratch.path, &[("Depots", rows)]).expect("write fixture");

        let locations =
            read_locations(&scratch.path, &WorkbookLayout::default()).expect("should read");

        assert_eq!(locations, [Location::new("A", "1 Main St").expect("location")]);
    }

    #[rstest]
    fn keeps_cell_text_verbatim(scratch: Scratch) {
        let rows = depots_sheet(&[[" Depot 7 ", "  2 Oak Ave "]]);
        write_workbook(&scratch.path, &[("Depots", rows)]).expect("write fixture");

        let locations =
            read_locations(&scratch.path, &WorkbookLayout::default()).expect("should read");

        let depot = locations.first().expect("one location");
        assert_eq!(depot.designation(), " Depot 7 ");
        assert_eq!(depot.address(), "  2 Oak Ave ");
    }

    #[rstest]
    fn skips_fully_blank_rows(scratch: Scratch) {
        let rows = depots_sheet(&[["A", "1 Main St"], ["", " "], ["B", "2 Oak Ave"]]);
        write_workbook(&scratch.path, &[("Depots", rows)]).expect("write fixture");

        let locations =
            read_locations(&scratch.path, &WorkbookLayout::default()).expect("should read");

        assert_eq!(locations.len(), 2);
    }

    #[rstest]
    fn half_blank_row_is_an_error(scratch: Scratch) {
        let rows = depots_sheet(&[["A", "1 Main St"], ["B", ""]]);
        write_workbook(&scratch.path, &[("Depots", rows)]).expect("write fixture");

        let err = read_locations(&scratch.path, &WorkbookLayout::default())
            .expect_err("should fail");

        assert!(
            matches!(err, WorkbookError::IncompleteRow { row: 3, .. }),
            "got {err:?}"
        );
    }

    #[rstest]
    fn missing_column_is_a_configuration_error(scratch: Scratch) {
        let rows = vec![vec!["Depot Designation".to_owned()], vec!["A".to_owned()]];
        write_workbook(&scratch.path, &[("Depots", rows)]).expect("write fixture");

        let err = read_locations(&scratch.path, &WorkbookLayout::default())
            .expect_err("should fail");

        assert!(err.is_configuration());
        assert!(
            matches!(&err, WorkbookError::MissingColumns { columns, .. }
                if columns == &["Depot Address".to_owned()]),
            "got {err:?}"
        );
    }

    #[rstest]
    fn missing_sheet_is_reported(scratch: Scratch) {
        write_workbook(&scratch.path, &[("Other", depots_sheet(&[]))]).expect("write fixture");

        let err = read_locations(&scratch.path, &WorkbookLayout::default())
            .expect_err("should fail");

        assert!(
            matches!(&err, WorkbookError::MissingSheet { sheet, .. } if sheet == "Depots"),
            "got {err:?}"
        );
    }

    #[rstest]
    fn unreadable_file_is_an_open_error(scratch: Scratch) {
        std::fs::write(&scratch.path, b"not a zip").expect("write junk");

        let err = read_locations(&scratch.path, &WorkbookLayout::default())
            .expect_err("should fail");

        assert!(matches!(err, WorkbookError::Open { .. }), "got {err:?}");
    }

    #[rstest]
    fn write_replaces_output_sheet_and_keeps_input(scratch: Scratch) {
        let stale = vec![vec!["stale".to_owned()], vec!["row".to_owned()], vec!["row".to_owned()]];
        write_workbook(
            &scratch.path,
            &[
                ("Depots", depots_sheet(&[["A", "1 Main St"]])),
                ("Driving Times", stale),
            ],
        )
        .expect("write fixture");
        let records = [OutputRecord {
            origin_designation: "A".to_owned(),
            origin_address: "1 Main St".to_owned(),
            destination_designation: "B".to_owned(),
            destination_address: "2 Oak Ave".to_owned(),
            duration_minutes: 12.5,
            distance_miles: None,
        }];

        write_records(&scratch.path, &WorkbookLayout::default(), &records).expect("should write");

        let book = reader::xlsx::read(&scratch.path).expect("reopen");
        let sheet = book.get_sheet_by_name("Driving Times").expect("output sheet");
        assert_eq!(sheet.get_value((1, 1)), "Depot 1 Designation");
        assert_eq!(sheet.get_value((6, 1)), "Driving Distance (miles)");
        assert_eq!(sheet.get_value((3, 2)), "B");
        assert_eq!(sheet.get_value((5, 2)), "12.5");
        assert_eq!(sheet.get_value((6, 2)), "");
        assert_eq!(sheet.get_highest_row(), 2);
        assert!(book.get_sheet_by_name("Depots").is_some());
    }
}
