//! # Spreadsheet Reading Module
//!
//! Decodes one worksheet of an Excel workbook into a [`Grid`]. Only the Office
//! Open XML family (`.xlsx`, `.xlsm`, `.xlam`) is read; the package is opened
//! with `zip` and its parts are streamed through `quick-xml`.
use crate::error::RoomSpecError;
use crate::grid::Grid;
use std::path::Path;
use thiserror::Error;

pub(crate) mod cell;
pub mod criteria;
pub(crate) mod excel;
#[cfg(test)]
pub(crate) mod fixture;
pub(crate) mod reference;
pub mod xlsx;

pub use criteria::Criteria;
pub use xlsx::XlsxSpreadsheet;

/// Errors raised while locating and decoding workbook content.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("Cannot detect file format for '{0}'")]
    UnsupportedFormat(String),

    #[error("Missing workbook part '{0}'")]
    FileError(String),

    #[error("Spreadsheet '{0}' has no worksheets")]
    SpreadsheetEmptyError(String),

    #[error("Sheet '{sheet}' not found in '{file}', available sheets: {available}")]
    SheetNotFound {
        file: String,
        sheet: String,
        available: String,
    },

    #[error("Shared string {index} referenced at {reference} does not exist")]
    SharedStringError { reference: String, index: usize },

    #[error("Date serial '{0}' is outside the supported calendar range")]
    DateOutOfRange(String),

    #[error("Worksheet '{sheet}' spans {rows} x {cols} cells, more than {limit} allowed")]
    GridTooLarge {
        sheet: String,
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("Cell value error in '{0}' sheet '{1}' at {2}: {3}")]
    CellValueError(String, String, String, String),
}

/// Common interface of workbook readers.
pub trait Spreadsheet {
    /// Returns the file name of this spreadsheet
    fn name(&self) -> String;

    /// Worksheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Reads the first worksheet accepted by `criteria` into a grid
    fn read_sheet(&mut self, criteria: &Criteria) -> Result<Grid, RoomSpecError>;
}

/// Opens a workbook, choosing the reader from the file extension.
pub fn open(file_name: &str) -> Result<Box<dyn Spreadsheet>, RoomSpecError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("xlsx") | Some("xlsm") | Some("xlam") => Ok(Box::new(XlsxSpreadsheet::open(file_name)?)),
        _ => Err(SpreadsheetError::UnsupportedFormat(file_name.to_owned()))?,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_extensions() {
        for name in ["rooms.csv", "rooms.ods", "rooms"] {
            match open(name) {
                Err(RoomSpecError::SpreadsheetError(SpreadsheetError::UnsupportedFormat(file))) => assert_eq!(file, name),
                Err(error) => panic!("unexpected error {}", error),
                Ok(_) => panic!("opened {}", name),
            }
        }
    }

    #[test]
    fn missing_workbook_is_io_error() {
        assert!(matches!(open("does-not-exist.xlsx"), Err(RoomSpecError::IoError(_))));
    }
}
