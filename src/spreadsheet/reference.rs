//! Conversions between Excel-style cell references (`B7`) and 0-based indexes.
use regex::Regex;
use std::sync::LazyLock;

static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?([A-Za-z]{1,3})\$?(\d+)$").expect("Hardcode regex pattern"));

/// Converts a column name ("A", "AB") to a 0-based column index.
pub(crate) fn col_to_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for character in name.chars() {
        if !character.is_ascii_alphabetic() {
            return None;
        }
        let digit = (character.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index - 1)
}

/// Converts a 1-based row number ("1", "42") to a 0-based row index.
pub(crate) fn row_to_index(number: &str) -> Option<usize> {
    number.parse::<usize>().ok()?.checked_sub(1)
}

/// Converts a 0-based column index to its column name.
pub(crate) fn index_to_col(col: usize) -> String {
    let mut col = col + 1;
    let mut name = Vec::<char>::new();
    while col > 0 {
        col -= 1;
        name.push(char::from(b'A' + (col % 26) as u8));
        col /= 26;
    }
    name.iter().rev().collect()
}

/// Parses a cell reference into a 0-based (row, col) pair.
pub(crate) fn reference_to_index(reference: &str) -> Option<(usize, usize)> {
    let captures = REFERENCE_PATTERN.captures(reference)?;
    let col = col_to_index(captures.get(1)?.as_str())?;
    let row = row_to_index(captures.get(2)?.as_str())?;
    Some((row, col))
}

/// Formats a 0-based (row, col) pair as a cell reference.
pub(crate) fn index_to_reference(row: usize, col: usize) -> String {
    format!("{}{}", index_to_col(col), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names() {
        assert_eq!(col_to_index("A"), Some(0));
        assert_eq!(col_to_index("z"), Some(25));
        assert_eq!(col_to_index("AA"), Some(26));
        assert_eq!(col_to_index("XFD"), Some(16_383));
        assert_eq!(col_to_index(""), None);
        assert_eq!(col_to_index("A1"), None);

        assert_eq!(index_to_col(0), "A");
        assert_eq!(index_to_col(25), "Z");
        assert_eq!(index_to_col(26), "AA");
        assert_eq!(index_to_col(16_383), "XFD");
    }

    #[test]
    fn row_numbers() {
        assert_eq!(row_to_index("1"), Some(0));
        assert_eq!(row_to_index("10"), Some(9));
        assert_eq!(row_to_index("0"), None);
        assert_eq!(row_to_index(""), None);
    }

    #[test]
    fn references() {
        assert_eq!(reference_to_index("A1"), Some((0, 0)));
        assert_eq!(reference_to_index("I5"), Some((4, 8)));
        assert_eq!(reference_to_index("$AA$10"), Some((9, 26)));
        assert_eq!(reference_to_index("10A"), None);
        assert_eq!(reference_to_index("A0"), None);

        assert_eq!(index_to_reference(0, 0), "A1");
        assert_eq!(index_to_reference(4, 8), "I5");
        assert_eq!(index_to_reference(9, 26), "AA10");
    }
}
