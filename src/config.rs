use crate::error::ResultMessage;
use crate::error::RoomSpecError;
use crate::rooms::Layout;
use crate::spreadsheet::Criteria;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Output path that writes the JSON document to standard output.
pub const STDOUT: &str = "-";

/// Everything one extraction run needs. Missing fields in a configuration file
/// fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workbook to read
    pub input: PathBuf,
    /// Worksheet holding the room table, exact name or glob pattern
    pub sheet_name: String,
    /// Destination of the JSON document, `-` for standard output
    pub output: PathBuf,
    /// Leading worksheet rows consumed as a column header
    pub header_rows: usize,
    /// Read error cells as blanks instead of failing
    pub error_as_null: bool,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("BRIEF.xlsx"),
            sheet_name: "ROOM SPECIFICATIONS".to_owned(),
            output: PathBuf::from("src").join("rooms.json"),
            header_rows: 1,
            error_as_null: true,
            layout: Layout::default(),
        }
    }
}

impl Config {
    /// Loads a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, RoomSpecError> {
        let path = path.as_ref();
        let message = format!("Load config '{}' failed", path.display());
        let content = fs::read_to_string(path).map_err(RoomSpecError::from).with_prefix(&message)?;
        serde_json::from_str(&content).map_err(RoomSpecError::from).with_prefix(&message)
    }

    pub fn criteria(&self) -> Criteria {
        Criteria::new(&self.sheet_name, self.header_rows, self.error_as_null)
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == STDOUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("BRIEF.xlsx"));
        assert_eq!(config.sheet_name, "ROOM SPECIFICATIONS");
        assert_eq!(config.output, PathBuf::from("src/rooms.json"));
        assert_eq!(config.header_rows, 1);
        assert!(config.error_as_null);
        assert!(!config.writes_to_stdout());
    }

    #[test]
    fn partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sheet_name": "ROOMS", "output": "-", "layout": {{"report_col": 9}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.sheet_name, "ROOMS");
        assert!(config.writes_to_stdout());
        assert_eq!(config.input, PathBuf::from("BRIEF.xlsx"));
        assert_eq!(config.layout.report_col, 9);
        assert_eq!(config.layout.tier_count, 3);

        let criteria = config.criteria();
        assert_eq!(criteria.sheet_name, "ROOMS");
        assert_eq!(criteria.header_rows, 1);
    }

    #[test]
    fn invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let error = Config::from_file(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Load config"));

        assert!(Config::from_file("does-not-exist.json").is_err());
    }
}
