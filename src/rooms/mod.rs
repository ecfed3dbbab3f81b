//! # Room Table Extraction
//!
//! Walks the fixed "ROOM SPECIFICATIONS" worksheet layout and reshapes it into
//! flat, tier-specific room records.
//!
//! The layout is a sequence of blocks. Each block starts at an *anchor row*
//! whose marker column reads `ID`; the row above it names the room, the anchor
//! row holds one identifier per tier, and the rows below it list attributes
//! until the marker column is blank:
//!
//! ```text
//!        A        B        C        D    E         F          G         ...  I
//!  1                                     Basic     Standard   Premium
//!  ..
//!  n     R1       Foyer
//!  n+1                     ID            A1        B1         C1
//!  n+2                     Area          12        15         20        visible
//!  n+3                     (blank)
//! ```
use thiserror::Error;

pub mod extract;
pub mod layout;
pub mod record;

pub use extract::attribute_rows;
pub use extract::extract;
pub use extract::find_anchors;
pub use layout::Layout;
pub use record::Attribute;
pub use record::RoomRecord;

/// Input-shape and lookup failures raised while walking the grid.
///
/// All of them are fatal: extraction never returns partial results.
#[derive(Error, Debug, PartialEq)]
pub enum ExtractError {
    /// A fixed-offset read fell outside the grid (narrow or ragged sheet)
    #[error("Cell {reference} (row {row}, column {col}) is outside the sheet")]
    CellOutOfRange {
        reference: String,
        row: usize,
        col: usize,
    },

    /// An anchor on the first grid row has no room name row above it
    #[error("Anchor at grid row {row} has no room name row above it")]
    AnchorWithoutNameRow { row: usize },

    /// The tier label header row is not part of the grid
    #[error("Missing tier header row {row}")]
    MissingHeaderRow { row: usize },
}
