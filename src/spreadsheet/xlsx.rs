use crate::error::RoomSpecError;
use crate::grid::CellValue;
use crate::grid::Grid;
use crate::helpers::xml::XmlNodeHelper;
use crate::helpers::xml::XmlReader;
use crate::helpers::xml::XmlTextContextHelper;
use crate::helpers::zip::ZipHelper;
use crate::match_xml_events;
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::cell::CellType;
use crate::spreadsheet::criteria::Criteria;
use crate::spreadsheet::excel;
use crate::spreadsheet::excel::load_relationships;
use crate::spreadsheet::reference::index_to_reference;
use crate::spreadsheet::reference::reference_to_index;
use crate::spreadsheet::reference::row_to_index;
use crate::spreadsheet::Spreadsheet;
use crate::spreadsheet::SpreadsheetError;
use quick_xml::events::Event;
use quick_xml::name::QName;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use zip::ZipArchive;

// XML tag names for parsing Excel XLSX format
const TAG_CUSTOM_FORMATS: QName = QName(b"numFmts"); // Custom number formats container
const TAG_CUSTOM_FORMAT: QName = QName(b"numFmt");   // Individual custom number format
const TAG_FORMAT_INDEXES: QName = QName(b"cellXfs");  // Cell format indexes container
const TAG_FORMAT_INDEX: QName = QName(b"xf");         // Individual cell format index
const TAG_SHARED_STRING_ITEM: QName = QName(b"si");   // Shared string table item
const TAG_PHONETIC_TEXT: QName = QName(b"rPh");       // Phonetic text for Asian languages
const TAG_TEXT: QName = QName(b"t");                  // Text content within strings
const TAG_WORKBOOK_PROPERTIES: QName = QName(b"workbookPr"); // Workbook properties
const TAG_SHEET: QName = QName(b"sheet");             // Worksheet definition
const TAG_ROW: QName = QName(b"row");                 // Row in worksheet
const TAG_CELL: QName = QName(b"c");                  // Cell in worksheet
const TAG_INLINE_STRING: QName = QName(b"is");        // Inline string value
const TAG_VALUE: QName = QName(b"v");                 // Cell value content

/// Upper bound on rows x columns of a decoded worksheet grid
const MAX_GRID_CELLS: usize = 1 << 24;

/// Represents an Excel XLSX spreadsheet file
pub struct XlsxSpreadsheet<RS: Read + Seek> {
    /// File name of the spreadsheet
    pub name: String,
    /// ZIP archive containing the XLSX file contents
    zip: ZipArchive<RS>,
    /// Parsed number formats for cell type detection, indexed by style id
    number_formats: Vec<CellType>,
    /// Shared string table
    shared_strings: Vec<String>,
    /// List of worksheets with (name, zip_path) pairs
    sheets: Vec<(String, String)>,
}

impl XlsxSpreadsheet<BufReader<File>> {
    /// Opens an XLSX spreadsheet file and parses its structure
    pub fn open(file_name: &str) -> Result<Self, RoomSpecError> {
        let file = File::open(file_name)?;
        Self::from_reader(file_name, BufReader::new(file))
    }
}

impl<RS: Read + Seek> XlsxSpreadsheet<RS> {
    /// Parses workbook structure, styles and shared strings from any seekable source
    ///
    /// # Arguments
    /// * `name` - Name used in log and error messages
    /// * `reader` - The XLSX package content
    pub fn from_reader(name: &str, reader: RS) -> Result<Self, RoomSpecError> {
        let mut zip = ZipArchive::new(reader)?;
        let (sheets, is_1904) = load_workbook(&mut zip)?;
        if sheets.is_empty() {
            Err(SpreadsheetError::SpreadsheetEmptyError(name.to_owned()))?
        }
        let number_formats = load_number_formats(&mut zip, is_1904)?;
        let shared_strings = load_shared_strings(&mut zip)?;
        log::debug!(
            "Opened '{}': {} sheet(s), {} shared string(s), 1904 dates: {}",
            name,
            sheets.len(),
            shared_strings.len(),
            is_1904
        );
        Ok(XlsxSpreadsheet {
            name: name.to_owned(),
            zip,
            number_formats,
            shared_strings,
            sheets,
        })
    }

    /// Builds the grid from decoded cells: header rows dropped, columns from A, blanks filled
    fn to_grid(&self, sheet_name: &str, cells: Vec<Cell>, header_rows: usize) -> Result<Grid, RoomSpecError> {
        let row_upper = cells.iter().filter(|cell| cell.row >= header_rows).map(|cell| cell.row).max();
        let col_upper = cells.iter().filter(|cell| cell.row >= header_rows).map(|cell| cell.col).max();
        let (row_count, col_count) = match row_upper.zip(col_upper) {
            Some((row_upper, col_upper)) => (row_upper + 1 - header_rows, col_upper + 1),
            None => (0, 0),
        };
        if row_count.checked_mul(col_count).map_or(true, |size| size > MAX_GRID_CELLS) {
            Err(SpreadsheetError::GridTooLarge {
                sheet: sheet_name.to_owned(),
                rows: row_count,
                cols: col_count,
                limit: MAX_GRID_CELLS,
            })?
        }

        let mut rows = vec![vec![CellValue::Empty; col_count]; row_count];
        for cell in cells.into_iter().filter(|cell| cell.row >= header_rows) {
            let value = if cell.kind == CellType::SharedString {
                let index = cell.value.trim().parse::<usize>()?;
                let text = self.shared_strings.get(index).ok_or_else(|| SpreadsheetError::SharedStringError {
                    reference: cell.reference(),
                    index,
                })?;
                CellValue::Text(text.to_owned())
            } else {
                cell.to_value()?
            };
            rows[cell.row - header_rows][cell.col] = value;
        }
        Ok(Grid::with_origin(rows, header_rows))
    }
}

impl<RS: Read + Seek> Spreadsheet for XlsxSpreadsheet<RS> {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.to_owned()).collect()
    }

    /// Reads the first worksheet accepted by the criteria
    ///
    /// Cells carrying no value are left out; error cells either become blanks
    /// or abort the read depending on `criteria.error_as_null`.
    fn read_sheet(&mut self, criteria: &Criteria) -> Result<Grid, RoomSpecError> {
        let (sheet_name, zip_path) = self
            .sheets
            .iter()
            .find(|(name, _)| criteria.accept(name))
            .cloned()
            .ok_or_else(|| SpreadsheetError::SheetNotFound {
                file: self.name.to_owned(),
                sheet: criteria.sheet_name.to_owned(),
                available: self.sheet_names().join(", "),
            })?;
        log::info!("Reading sheet '{}' from '{}'", sheet_name, self.name);

        let mut cells = Vec::<Cell>::new();
        let mut row_count = 0usize;
        let mut col_count = 0usize;
        let mut row = 0usize;
        let mut col = 0usize;
        let mut kind = CellType::default();
        let mut value = String::new();
        let mut reader = self
            .zip
            .xml_reader(&zip_path)?
            .ok_or_else(|| SpreadsheetError::FileError(zip_path.to_owned()))?;
        match_xml_events!(reader => {
            Event::Start(event) if event.name() == TAG_ROW => {
                if let Some(index) = event.get_attribute_value("r")?.and_then(|number| row_to_index(&number)) {
                    row_count = index;
                }
                col_count = 0;
            }
            Event::End(event) if event.name() == TAG_ROW => {
                row_count += 1;
                col_count = 0;
            }
            Event::Start(event) if event.name() == TAG_CELL => {
                (row, col) = event.get_attribute_value("r")?
                    .and_then(|reference| reference_to_index(&reference))
                    .unwrap_or((row_count, col_count));
                col_count = col + 1;
                value.clear();
                let t = event.get_attribute_value("t")?;
                let s = event.get_attribute_value("s")?;
                kind = cell_type(&self.number_formats, t.as_deref(), s.as_deref(), criteria.error_as_null)?;
            }
            Event::Start(event) if kind != CellType::Empty && event.name() == TAG_INLINE_STRING => {
                value = read_string_value(&mut reader, TAG_INLINE_STRING, false)?;
            }
            Event::Start(event) if kind != CellType::Empty && event.name() == TAG_VALUE => {
                value = read_string_value(&mut reader, TAG_VALUE, true)?;
            }
            Event::End(event) if event.name() == TAG_CELL => {
                if kind == CellType::Error {
                    Err(SpreadsheetError::CellValueError(
                        self.name.to_owned(),
                        sheet_name.to_owned(),
                        index_to_reference(row, col),
                        value.to_owned(),
                    ))?
                }
                if kind != CellType::Empty && !value.is_empty() {
                    cells.push(Cell {
                        row,
                        col,
                        kind,
                        value: value.to_owned(),
                    });
                }
                kind = CellType::default();
                value.clear();
            }
        });
        drop(reader);

        log::debug!("Decoded {} non-blank cell(s) from sheet '{}'", cells.len(), sheet_name);
        self.to_grid(&sheet_name, cells, criteria.header_rows)
    }
}

/// Classifies a `<c>` element from its `t` (type) and `s` (style) attributes
fn cell_type(number_formats: &[CellType], t: Option<&str>, s: Option<&str>, error_as_null: bool) -> Result<CellType, RoomSpecError> {
    let kind = match t {
        Some("inlineStr") | Some("str") => CellType::InlineString,
        Some("s") => CellType::SharedString,
        Some("d") => CellType::IsoDateTime,
        Some("b") => CellType::Boolean,
        Some("e") => {
            if error_as_null {
                CellType::Empty
            } else {
                CellType::Error
            }
        }
        _ => CellType::Number,
    };
    match s.filter(|format_id| kind == CellType::Number && !format_id.is_empty()) {
        Some(format_id) => {
            let index = format_id.parse::<usize>()?;
            Ok(number_formats.get(index).copied().unwrap_or(CellType::Number))
        }
        None => Ok(kind),
    }
}

/// Loads workbook structure and worksheet information from XLSX file
///
/// # Returns
/// Tuple of (worksheets, is_1904_date_system) where worksheets are (name, zip_path) pairs
fn load_workbook<RS: Read + Seek>(zip: &mut ZipArchive<RS>) -> Result<(Vec<(String, String)>, bool), RoomSpecError> {
    let relationships = load_relationships(zip, "xl/_rels/workbook.xml.rels")?;
    let mut reader = zip.xml_reader("xl/workbook.xml")?
        .ok_or_else(|| SpreadsheetError::FileError("xl/workbook.xml".to_string()))?;
    let mut sheets: Vec<(String, String)> = Vec::new();
    let mut is_1904 = false;
    match_xml_events!(reader => {
        Event::Start(event) if event.name() == TAG_SHEET => {
            let mut name = None::<String>;
            let mut id = None::<String>;
            for result in event.attributes() {
                let attribute = result?;
                let key = attribute.key.local_name();
                if key.as_ref() == b"name" {
                    name = Some(attribute.unescape_value()?.to_string());
                } else if key.as_ref() == b"id" {
                    id = Some(attribute.unescape_value()?.to_string());
                }
            }
            if let Some((name, id)) = name.zip(id) {
                if let Some(path) = relationships.get(&id) {
                    sheets.push((name, path.to_owned()));
                }
            }
        }
        Event::Start(event) if event.name() == TAG_WORKBOOK_PROPERTIES => {
            is_1904 = event.get_attribute_value("date1904")?
                .map(|value| value.eq("1") || value.eq("true"))
                .unwrap_or(false);
        }
    });
    Ok((sheets, is_1904))
}

/// Loads number formats and cell styles from the styles part
///
/// # Returns
/// Vector of CellType values indexed by style ID
fn load_number_formats<RS: Read + Seek>(zip: &mut ZipArchive<RS>, is_1904: bool) -> Result<Vec<CellType>, RoomSpecError> {
    let mut reader = match zip.xml_reader("xl/styles.xml")? {
        Some(reader) => reader,
        None => return Ok(Vec::new()),
    };

    let mut custom_formats_context = false;
    let mut custom_formats = HashMap::<String, CellType>::new();

    let mut format_indexes_context = false;
    let mut format_indexes = Vec::<String>::new();

    match_xml_events!(reader => {
        Event::Start(event) if event.name() == TAG_CUSTOM_FORMATS => custom_formats_context = true,
        Event::End(event) if event.name() == TAG_CUSTOM_FORMATS => custom_formats_context = false,
        Event::Start(event) if custom_formats_context && event.name() == TAG_CUSTOM_FORMAT => {
            let id = event.get_attribute_value("numFmtId")?;
            let format = event.get_attribute_value("formatCode")?;
            if let Some((id, format)) = id.zip(format) {
                let style = CellType::parse_custom_number_format(&format, is_1904);
                custom_formats.insert(id.to_string(), style);
            }
        }

        Event::Start(event) if event.name() == TAG_FORMAT_INDEXES => format_indexes_context = true,
        Event::End(event) if event.name() == TAG_FORMAT_INDEXES => break,
        Event::Start(event) if format_indexes_context && event.name() == TAG_FORMAT_INDEX => {
            let id = event.get_attribute_value("numFmtId")?;
            format_indexes.push(id.map(|id| id.to_string()).unwrap_or_default());
        }
    });

    Ok(excel::load_number_formats(format_indexes, custom_formats, is_1904))
}

/// Loads the whole shared string table
fn load_shared_strings<RS: Read + Seek>(zip: &mut ZipArchive<RS>) -> Result<Vec<String>, RoomSpecError> {
    let mut shared_strings = Vec::<String>::new();
    let mut reader = match zip.xml_reader("xl/sharedStrings.xml")? {
        Some(reader) => reader,
        None => return Ok(shared_strings),
    };
    match_xml_events!(reader => {
        Event::Start(event) if event.name() == TAG_SHARED_STRING_ITEM => {
            let string = read_string_value(&mut reader, TAG_SHARED_STRING_ITEM, false)?;
            shared_strings.push(string);
        }
    });
    Ok(shared_strings)
}

/// Reads string value from XML content, handling text and CDATA sections
///
/// Skips phonetic text annotations and concatenates rich text runs.
///
/// # Arguments
/// * `reader` - XML reader positioned at the start of the string content
/// * `end_tag` - XML tag that marks the end of the string content
/// * `is_text_content` - Whether to treat the content as text by default
fn read_string_value<R: BufRead>(
    reader: &mut XmlReader<R>,
    end_tag: QName,
    is_text_content: bool,
) -> Result<String, RoomSpecError> {
    let mut is_phonetic_text = false;
    let mut is_text = is_text_content;
    let mut text = String::new();
    match_xml_events!(reader => {
        Event::End(event) if event.name() == end_tag => break,
        Event::Start(event) if event.name() == TAG_PHONETIC_TEXT => is_phonetic_text = true,
        Event::End(event) if event.name() == TAG_PHONETIC_TEXT => is_phonetic_text = false,
        Event::Start(event) if !is_phonetic_text && event.name() == TAG_TEXT => is_text = true,
        Event::End(event) if is_text && event.name() == TAG_TEXT => is_text = false,
        Event::Text(event) if is_text => text.push_str(&event.xml_content()?),
        Event::CData(event) if is_text => text.push_str(&event.xml_content()?),
        Event::GeneralRef(event) if is_text => text.push_bytes_ref(&event)?,
    });
    Ok(text)
}
