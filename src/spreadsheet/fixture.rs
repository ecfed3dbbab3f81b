//! In-memory XLSX packages for tests.
use std::io::Cursor;
use std::io::Write;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const NAMESPACE: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIP_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Minimal workbook content: worksheets as `(name, <sheetData> children)`.
#[derive(Default)]
pub(crate) struct Workbook<'a> {
    pub(crate) sheets: Vec<(&'a str, String)>,
    pub(crate) shared_strings: Vec<&'a str>,
    pub(crate) styles: Option<&'a str>,
    pub(crate) date1904: bool,
}

impl Workbook<'_> {
    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let mut sheets = String::new();
        let mut relationships = String::new();
        for (index, (name, data)) in self.sheets.iter().enumerate() {
            let id = index + 1;
            sheets.push_str(&format!(r#"<sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#));
            relationships.push_str(&format!(
                r#"<Relationship Id="rId{id}" Type="{RELATIONSHIP_NAMESPACE}/worksheet" Target="worksheets/sheet{id}.xml"/>"#
            ));
            write(
                &mut zip,
                &format!("xl/worksheets/sheet{id}.xml"),
                &format!(r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="{NAMESPACE}"><sheetData>{data}</sheetData></worksheet>"#),
                options,
            );
        }
        relationships.push_str(&format!(
            r#"<Relationship Id="rIdStyles" Type="{RELATIONSHIP_NAMESPACE}/styles" Target="styles.xml"/>"#
        ));

        write(
            &mut zip,
            "xl/workbook.xml",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="{NAMESPACE}" xmlns:r="{RELATIONSHIP_NAMESPACE}"><workbookPr date1904="{}"/><sheets>{sheets}</sheets></workbook>"#,
                if self.date1904 { "1" } else { "0" }
            ),
            options,
        );
        write(
            &mut zip,
            "xl/_rels/workbook.xml.rels",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{relationships}</Relationships>"#
            ),
            options,
        );
        if !self.shared_strings.is_empty() {
            let items: String = self
                .shared_strings
                .iter()
                .map(|text| format!("<si><t>{text}</t></si>"))
                .collect();
            write(
                &mut zip,
                "xl/sharedStrings.xml",
                &format!(r#"<?xml version="1.0" encoding="UTF-8"?><sst xmlns="{NAMESPACE}">{items}</sst>"#),
                options,
            );
        }
        if let Some(styles) = self.styles {
            write(
                &mut zip,
                "xl/styles.xml",
                &format!(r#"<?xml version="1.0" encoding="UTF-8"?><styleSheet xmlns="{NAMESPACE}">{styles}</styleSheet>"#),
                options,
            );
        }
        zip.finish().expect("finish zip").into_inner()
    }
}

fn write(zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, content: &str, options: SimpleFileOptions) {
    zip.start_file(name, options).expect("start zip entry");
    zip.write_all(content.as_bytes()).expect("write zip entry");
}

/// `<row>` element holding the given cells.
pub(crate) fn row(number: usize, cells: &[String]) -> String {
    format!(r#"<row r="{number}">{}</row>"#, cells.concat())
}

pub(crate) fn text(reference: &str, value: &str) -> String {
    format!(r#"<c r="{reference}" t="inlineStr"><is><t>{value}</t></is></c>"#)
}

pub(crate) fn number(reference: &str, value: f64) -> String {
    format!(r#"<c r="{reference}"><v>{value}</v></c>"#)
}

/// The "ROOM SPECIFICATIONS" sheet with a column header row, the tier header
/// row and one Foyer block; Basic, Standard and Premium areas are 12, 15, 20.
pub(crate) fn foyer_sheet() -> String {
    [
        row(1, &[text("A1", "Room"), text("B1", "Name"), text("C1", "Attribute")]),
        row(2, &[]),
        row(3, &[text("D3", "Basic"), text("E3", "Standard"), text("F3", "Premium"), text("I3", "Report")]),
        row(4, &[text("A4", "R1"), text("B4", "Foyer")]),
        row(5, &[text("C5", "ID"), text("D5", "A1"), text("E5", "B1"), text("F5", "C1")]),
        row(6, &[text("C6", "Area"), number("D6", 12.0), number("E6", 15.0), number("F6", 20.0), text("I6", "visible")]),
        row(7, &[text("C7", "Ceiling"), text("D7", "Plaster"), text("F7", "Timber")]),
    ]
    .concat()
}

pub(crate) fn foyer_workbook() -> Vec<u8> {
    Workbook {
        sheets: vec![("BRIEF", row(1, &[text("A1", "Project")])), ("ROOM SPECIFICATIONS", foyer_sheet())],
        ..Workbook::default()
    }
    .to_bytes()
}
