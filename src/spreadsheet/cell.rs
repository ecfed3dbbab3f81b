use crate::error::RoomSpecError;
use crate::grid::CellValue;
use crate::spreadsheet::reference::index_to_reference;
use crate::spreadsheet::SpreadsheetError;
use chrono::Duration;
use chrono::NaiveDate;

/// Types of cell data in worksheet XML.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) enum CellType {
    #[default]
    Empty,
    /// Boolean values (true/false)
    Boolean,
    /// Numeric values
    Number,
    /// Date/time values stored as numbers from 1900 epoch
    NumberDateTime1900,
    /// Date values stored as numbers from 1900 epoch
    NumberDate1900,
    /// Time values stored as numbers from 1900 epoch
    NumberTime1900,
    /// Date/time values stored as numbers from 1904 epoch
    NumberDateTime1904,
    /// Date values stored as numbers from 1904 epoch
    NumberDate1904,
    /// Time values stored as numbers from 1904 epoch
    NumberTime1904,
    /// ISO 8601 date/time strings
    IsoDateTime,
    /// Inline string values
    InlineString,
    /// Shared string table references
    SharedString,
    /// Error values
    Error,
}

impl CellType {
    /// Parses built-in Excel number format IDs to determine cell type.
    pub(crate) fn parse_builtin_number_format_id(id: &str, is_1904: bool) -> Option<Self> {
        match id {
            "22" => Some(if is_1904 { Self::NumberDateTime1904 } else { Self::NumberDateTime1900 }),
            "14" | "15" | "16" | "17" => Some(if is_1904 { Self::NumberDate1904 } else { Self::NumberDate1900 }),
            "18" | "19" | "20" | "21" | "45" | "46" | "47" => Some(if is_1904 { Self::NumberTime1904 } else { Self::NumberTime1900 }),
            _ => None,
        }
    }

    /// Parses custom number format strings to determine cell type.
    /// Analyzes format codes for date/time patterns.
    pub(crate) fn parse_custom_number_format(format: &str, is_1904: bool) -> Self {
        let mut is_escaped = false;
        let mut is_literal = false;
        let mut is_date = false;
        let mut is_time = false;
        let mut is_color = false;
        for character in format.chars() {
            match character {
                _ if is_escaped => is_escaped = false,
                '_' | '\\' => is_escaped = true,

                '"' if is_literal => is_literal = false,
                '"' if !is_color => is_literal = true,

                ']' if is_color => is_color = false,
                '[' if !is_literal => is_color = true,
                _ if is_literal || is_color => (),

                'Y' | 'y' | 'D' | 'd' => is_date = true,
                'H' | 'h' | 'S' | 's' => is_time = true,
                _ => (),
            }
        }

        match (is_date, is_time, is_1904) {
            (true, true, false) => Self::NumberDateTime1900,
            (true, true, true) => Self::NumberDateTime1904,
            (true, false, false) => Self::NumberDate1900,
            (true, false, true) => Self::NumberDate1904,
            (false, true, false) => Self::NumberTime1900,
            (false, true, true) => Self::NumberTime1904,
            (false, false, _) => Self::Number,
        }
    }
}

/// A decoded worksheet cell with its position, type and raw text.
#[derive(Clone, Debug)]
pub(crate) struct Cell {
    /// Row index (0-based)
    pub(crate) row: usize,
    /// Column index (0-based)
    pub(crate) col: usize,
    /// Cell data type
    pub(crate) kind: CellType,
    /// Cell value as string
    pub(crate) value: String,
}

impl Cell {
    /// Returns the Excel-style cell reference (e.g., "A1", "B2").
    pub(crate) fn reference(&self) -> String {
        index_to_reference(self.row, self.col)
    }

    /// Converts the raw worksheet text into a typed grid value.
    /// Date and time formatted numbers become ISO text.
    pub(crate) fn to_value(&self) -> Result<CellValue, RoomSpecError> {
        let value = match self.kind {
            CellType::Empty | CellType::Error => CellValue::Empty,
            CellType::Boolean => CellValue::Bool(self.value == "1" || self.value.eq_ignore_ascii_case("true")),
            CellType::Number => CellValue::Number(self.to_double()?),
            CellType::NumberDateTime1900 => CellValue::Text(to_datetime_string(&self.value, false)?),
            CellType::NumberDateTime1904 => CellValue::Text(to_datetime_string(&self.value, true)?),
            CellType::NumberDate1900 => CellValue::Text(to_date_string(&self.value, false)?),
            CellType::NumberDate1904 => CellValue::Text(to_date_string(&self.value, true)?),
            CellType::NumberTime1900 | CellType::NumberTime1904 => CellValue::Text(to_time_string(&self.value)?),
            CellType::IsoDateTime => CellValue::Text(self.value.replace('T', " ")),
            CellType::InlineString | CellType::SharedString => CellValue::Text(self.value.to_owned()),
        };
        Ok(value)
    }

    fn to_double(&self) -> Result<f64, RoomSpecError> {
        self.value.trim().parse::<f64>().map_err(RoomSpecError::from)
    }
}

const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Converts an Excel serial number to whole milliseconds since the epoch day.
/// Rounded once on the full serial; date and time parts are split from the result.
fn to_milliseconds(value: &str) -> Result<i64, RoomSpecError> {
    let milliseconds = (value.trim().parse::<f64>()? * MILLISECONDS_PER_DAY as f64).round();
    if !milliseconds.is_finite() || milliseconds.abs() >= i64::MAX as f64 {
        Err(SpreadsheetError::DateOutOfRange(value.to_owned()))?
    }
    Ok(milliseconds as i64)
}

/// Formats a day count from the workbook epoch as an ISO date.
/// Handles Lotus 1-2-3 leap year bug for 1900 epoch.
fn format_date(value: &str, days: i64, is_1904: bool) -> Result<String, RoomSpecError> {
    let offset = if is_1904 {
        1462
    } else if days < 60 {
        1
    } else {
        0
    };
    let date = days
        .checked_add(offset)
        .and_then(Duration::try_days)
        .zip(NaiveDate::from_ymd_opt(1899, 12, 30))
        .and_then(|(duration, epoch)| epoch.checked_add_signed(duration))
        .ok_or_else(|| SpreadsheetError::DateOutOfRange(value.to_owned()))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Formats milliseconds within one day as an ISO time.
fn format_time(milliseconds_of_day: i64) -> String {
    let mut rest = milliseconds_of_day;
    let milliseconds = rest % 1_000; rest /= 1_000;
    let seconds = rest % 60; rest /= 60;
    let minutes = rest % 60; rest /= 60;
    let hours = rest;
    if milliseconds > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}.{milliseconds:03}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Converts Excel numeric date to ISO date string.
fn to_date_string(value: &str, is_1904: bool) -> Result<String, RoomSpecError> {
    let days = to_milliseconds(value)?.div_euclid(MILLISECONDS_PER_DAY);
    format_date(value, days, is_1904)
}

/// Converts Excel numeric time (fraction of a day) to ISO time string.
fn to_time_string(value: &str) -> Result<String, RoomSpecError> {
    Ok(format_time(to_milliseconds(value)?.rem_euclid(MILLISECONDS_PER_DAY)))
}

/// Converts Excel numeric datetime to ISO datetime string.
fn to_datetime_string(value: &str, is_1904: bool) -> Result<String, RoomSpecError> {
    let milliseconds = to_milliseconds(value)?;
    let date = format_date(value, milliseconds.div_euclid(MILLISECONDS_PER_DAY), is_1904)?;
    let time = format_time(milliseconds.rem_euclid(MILLISECONDS_PER_DAY));
    Ok(format!("{date} {time}"))
}
