use crate::grid::CellValue;
use serde::Deserialize;
use serde::Serialize;

/// Column and row offsets of the room table.
///
/// All offsets are 0-based grid positions. Tier `i` (1-based) reads its
/// identifier and attribute values from `marker_col + i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Column holding the anchor marker and attribute names
    pub marker_col: usize,
    /// Marker text identifying an anchor row, compared trimmed and case-insensitively
    pub anchor_marker: String,
    /// Column of the room identifier on the room name row
    pub room_id_col: usize,
    /// Column of the room name on the room name row
    pub room_name_col: usize,
    /// Row holding the tier labels
    pub tier_header_row: usize,
    /// Number of tier sub-columns
    pub tier_count: usize,
    /// Column holding the report flag of every attribute row
    pub report_col: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            marker_col: 2,
            anchor_marker: "id".to_owned(),
            room_id_col: 0,
            room_name_col: 1,
            tier_header_row: 1,
            tier_count: 3,
            report_col: 8,
        }
    }
}

impl Layout {
    /// Column of tier `tier` (1-based).
    pub fn tier_col(&self, tier: usize) -> usize {
        self.marker_col + tier
    }

    /// Tier numbers in output order.
    pub fn tiers(&self) -> impl Iterator<Item = usize> {
        1..=self.tier_count
    }

    /// Whether a marker-column cell starts an attribute block.
    pub fn is_anchor(&self, cell: &CellValue) -> bool {
        cell.to_text().trim().eq_ignore_ascii_case(self.anchor_marker.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offsets() {
        let layout = Layout::default();
        assert_eq!(layout.tiers().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(layout.tiers().map(|tier| layout.tier_col(tier)).collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(layout.report_col, 8);
    }

    #[test]
    fn anchor_marker() {
        let layout = Layout::default();
        assert!(layout.is_anchor(&CellValue::from("ID")));
        assert!(layout.is_anchor(&CellValue::from(" id ")));
        assert!(layout.is_anchor(&CellValue::from("Id")));
        assert!(!layout.is_anchor(&CellValue::from("IDs")));
        assert!(!layout.is_anchor(&CellValue::Empty));
        assert!(!layout.is_anchor(&CellValue::from(1.0)));
    }

    #[test]
    fn partial_override() {
        let layout: Layout = serde_json::from_str(r#"{"report_col": 9}"#).unwrap();
        assert_eq!(layout.report_col, 9);
        assert_eq!(layout.marker_col, 2);
        assert_eq!(layout.anchor_marker, "id");
    }
}
