use crate::grid::CellValue;
use crate::grid::Grid;
use crate::rooms::layout::Layout;
use crate::rooms::record::Attribute;
use crate::rooms::record::RoomRecord;
use crate::rooms::record::METADATA_KEYS;
use crate::rooms::ExtractError;
use std::ops::Range;

/// Rows whose marker column holds the anchor marker, top to bottom.
pub fn find_anchors(grid: &Grid, layout: &Layout) -> Result<Vec<usize>, ExtractError> {
    let mut anchors = Vec::new();
    for row in 0..grid.row_count() {
        if layout.is_anchor(grid.get(row, layout.marker_col)?) {
            anchors.push(row);
        }
    }
    Ok(anchors)
}

/// Attribute rows of the block starting at `anchor`.
///
/// The block ends at the first blank marker cell or at the end of the grid.
/// The terminator only depends on the marker column, so every tier of an
/// anchor shares it.
pub fn attribute_rows(grid: &Grid, layout: &Layout, anchor: usize) -> Result<Range<usize>, ExtractError> {
    let start = anchor + 1;
    let mut end = start;
    while end < grid.row_count() && !grid.get(end, layout.marker_col)?.is_blank() {
        end += 1;
    }
    Ok(start..end)
}

/// Extracts one record per (anchor, tier), in anchor order then tier order.
pub fn extract(grid: &Grid, layout: &Layout) -> Result<Vec<RoomRecord>, ExtractError> {
    let anchors = find_anchors(grid, layout)?;
    log::debug!("Found {} room anchor(s) in {} grid row(s)", anchors.len(), grid.row_count());

    let mut records = Vec::with_capacity(anchors.len() * layout.tier_count);
    for anchor in anchors {
        let name_row = anchor
            .checked_sub(1)
            .ok_or(ExtractError::AnchorWithoutNameRow { row: anchor })?;
        let room_id = grid.get(name_row, layout.room_id_col)?;
        let name = grid.get(name_row, layout.room_name_col)?;
        let rows = attribute_rows(grid, layout, anchor)?;

        for tier in layout.tiers() {
            let col = layout.tier_col(tier);
            let id = grid.get(anchor, col)?;
            let label = tier_label(grid, layout, col)?;
            let mut record = RoomRecord::new(room_id.clone(), id.clone(), name.clone(), tier, label.clone());

            for row in rows.clone() {
                let key = grid.get(row, layout.marker_col)?.to_text().trim().to_owned();
                let attribute = Attribute {
                    value: grid.get(row, col)?.or_empty_text(),
                    report: grid.get(row, layout.report_col)?.clone(),
                };
                if METADATA_KEYS.contains(&key.as_str()) {
                    log::warn!("Attribute '{}' at {} overrides a room metadata field", key, grid.reference(row, layout.marker_col));
                }
                if record.insert(key, attribute).is_some() && tier == 1 {
                    log::debug!("Duplicate attribute at {} replaces an earlier row", grid.reference(row, layout.marker_col));
                }
            }
            records.push(record);
        }
    }
    Ok(records)
}

fn tier_label<'a>(grid: &'a Grid, layout: &Layout, col: usize) -> Result<&'a CellValue, ExtractError> {
    if layout.tier_header_row >= grid.row_count() {
        return Err(ExtractError::MissingHeaderRow { row: layout.tier_header_row });
    }
    grid.get(layout.tier_header_row, col)
}
