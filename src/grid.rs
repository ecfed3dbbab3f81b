//! In-memory worksheet grid.
//!
//! A [`Grid`] is the read-only, row-major view of one worksheet that the room
//! extractor walks. Cells are addressed by 0-based `(row, col)`; reading
//! outside a row is an error rather than a silent blank, since the room
//! layout relies on fixed offsets.
use crate::rooms::ExtractError;
use crate::spreadsheet::reference::index_to_reference;
use serde::Serialize;
use serde::Serializer;

/// A single typed cell value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    /// Missing or blank cell
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// True for the blank sentinel and for text that trims to nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering used for attribute names and marker comparison.
    /// Whole numbers render without a fractional part.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(value) => value.to_string(),
            CellValue::Number(value) => match whole_number(*value) {
                Some(integer) => integer.to_string(),
                None => value.to_string(),
            },
            CellValue::Text(text) => text.to_owned(),
        }
    }

    /// The blank sentinel coerced to an empty string, everything else unchanged.
    pub fn or_empty_text(&self) -> CellValue {
        match self {
            CellValue::Empty => CellValue::Text(String::new()),
            value => value.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

fn whole_number(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
        Some(value as i64)
    } else {
        None
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Bool(value) => serializer.serialize_bool(*value),
            CellValue::Number(value) => match whole_number(*value) {
                Some(integer) => serializer.serialize_i64(integer),
                None => serializer.serialize_f64(*value),
            },
            CellValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Read-only 2D cell array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
    /// Worksheet row that grid row 0 was read from
    origin_row: usize,
}

impl Grid {
    /// Builds a grid whose row 0 is worksheet row 0.
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self::with_origin(rows, 0)
    }

    /// Builds a grid whose row 0 was read from worksheet row `origin_row`.
    pub fn with_origin(rows: Vec<Vec<CellValue>>, origin_row: usize) -> Self {
        Grid { rows, origin_row }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn origin_row(&self) -> usize {
        self.origin_row
    }

    /// Excel-style reference of a grid position in the source worksheet.
    pub fn reference(&self, row: usize, col: usize) -> String {
        index_to_reference(self.origin_row + row, col)
    }

    /// Checked cell access; a position outside the grid is an input-shape error.
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue, ExtractError> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .ok_or_else(|| ExtractError::CellOutOfRange {
                reference: self.reference(row, col),
                row,
                col,
            })
    }
}
