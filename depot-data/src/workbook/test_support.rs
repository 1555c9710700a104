//! Workbook fixtures for tests in this crate and its dependants.

use camino::Utf8Path;
use umya_spreadsheet::{new_file_empty_worksheet, reader, writer};

/// Write a workbook at `path` with one sheet per `(name, rows)` entry.
///
/// Rows are written from row 1; empty strings leave the cell unset.
///
/// # Errors
///
/// Returns a message if a sheet cannot be created or the file cannot be
/// written.
pub fn write_workbook(path: &Utf8Path, sheets: &[(&str, Vec<Vec<String>>)]) -> Result<(), String> {
    let mut book = new_file_empty_worksheet();
    for (name, rows) in sheets {
        let sheet = book.new_sheet(*name).map_err(str::to_owned)?;
        for (row, cells) in (1u32..).zip(rows) {
            for (col, value) in (1u32..).zip(cells) {
                if !value.is_empty() {
                    sheet.get_cell_mut((col, row)).set_value(value.as_str());
                }
            }
        }
    }
    writer::xlsx::write(&book, path).map_err(|err| err.to_string())
}

/// Read every cell of sheet `name` as strings, or `None` if it is absent.
///
/// # Errors
///
/// Returns a message if the workbook cannot be opened.
pub fn read_sheet(path: &Utf8Path, name: &str) -> Result<Option<Vec<Vec<String>>>, String> {
    let book = reader::xlsx::read(path).map_err(|err| err.to_string())?;
    Ok(book.get_sheet_by_name(name).map(|sheet| {
        (1..=sheet.get_highest_row())
            .map(|row| {
                (1..=sheet.get_highest_column())
                    .map(|col| sheet.get_value((col, row)))
                    .collect()
            })
            .collect()
    }))
}
