//! # Room Specification Extractor
//!
//! Reads the "ROOM SPECIFICATIONS" worksheet of a project brief workbook and
//! flattens it into a JSON array of tier-specific room records.
//!
//! ## Pipeline
//!
//! - **Spreadsheet**: the workbook is opened as an Office Open XML package and
//!   the configured worksheet is decoded into a [`Grid`]
//! - **Rooms**: the grid is scanned for `ID` anchor rows; every anchor yields
//!   one [`RoomRecord`] per tier carrying its attribute block
//! - **Output**: records are written as an indented JSON document
//!
//! ## Example
//!
//! ```no_run
//! use room_specs::{run, Config};
//!
//! let config = Config {
//!     input: "BRIEF.xlsx".into(),
//!     output: "rooms.json".into(),
//!     ..Config::default()
//! };
//! let records = run(&config)?;
//! println!("{} records", records.len());
//! # Ok::<(), room_specs::RoomSpecError>(())
//! ```
pub mod config;
pub mod error;
pub mod grid;
mod helpers;
pub mod rooms;
pub mod spreadsheet;

pub use crate::config::Config;
pub use crate::error::RoomSpecError;
pub use crate::grid::{CellValue, Grid};
pub use crate::rooms::{extract, Layout, RoomRecord};

use crate::error::ResultMessage;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Reads the configured worksheet into a grid.
pub fn read_grid(config: &Config) -> Result<Grid, RoomSpecError> {
    let file_name = config.input.to_string_lossy();
    let mut spreadsheet = spreadsheet::open(&file_name).with_prefix(&format!("Open '{}' failed", file_name))?;
    let grid = spreadsheet.read_sheet(&config.criteria())?;
    log::debug!(
        "Sheet '{}' decoded to {} x {} grid",
        config.sheet_name,
        grid.row_count(),
        grid.col_count()
    );
    Ok(grid)
}

/// Serializes records as a JSON array with 2-space indentation.
pub fn write_json<W: Write>(records: &[RoomRecord], writer: W) -> Result<(), RoomSpecError> {
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Writes the JSON document to `path`, creating missing parent directories.
pub fn write_output(records: &[RoomRecord], path: &Path) -> Result<(), RoomSpecError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_json(records, BufWriter::new(file))
}

/// Extracts the room records of `config.input` and writes them to `config.output`.
pub fn run(config: &Config) -> Result<Vec<RoomRecord>, RoomSpecError> {
    let grid = read_grid(config)?;
    let records = extract(&grid, &config.layout)?;
    log::info!("Extracted {} room record(s) from '{}'", records.len(), config.input.display());

    if config.writes_to_stdout() {
        write_json(&records, io::stdout().lock())?;
    } else {
        write_output(&records, &config.output)
            .with_prefix(&format!("Write '{}' failed", config.output.display()))?;
        log::info!("Wrote '{}'", config.output.display());
    }
    Ok(records)
}
