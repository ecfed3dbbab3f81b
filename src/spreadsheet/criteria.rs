use glob::Pattern;

/// Criteria for selecting and decoding the worksheet to extract.
#[derive(Clone, Debug)]
pub struct Criteria {
    /// Sheet name, matched exactly or as a glob pattern
    pub sheet_name: String,

    /// Leading worksheet rows consumed as a column header and left out of the grid.
    pub header_rows: usize,

    /// Convert error cells (`#N/A`, `#REF!`, ...) to blanks instead of failing.
    pub error_as_null: bool,

    pattern: Option<Pattern>,
}

impl Criteria {
    pub fn new(sheet_name: &str, header_rows: usize, error_as_null: bool) -> Self {
        Criteria {
            sheet_name: sheet_name.to_owned(),
            header_rows,
            error_as_null,
            pattern: Pattern::new(sheet_name).ok(),
        }
    }

    /// Checks if a sheet name matches the criteria.
    pub fn accept(&self, sheet_name: &str) -> bool {
        sheet_name == self.sheet_name
            || self
                .pattern
                .as_ref()
                .map(|pattern| pattern.matches(sheet_name))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name() {
        let criteria = Criteria::new("ROOM SPECIFICATIONS", 1, true);
        assert!(criteria.accept("ROOM SPECIFICATIONS"));
        assert!(!criteria.accept("ROOM SPECIFICATIONS (old)"));
        assert!(!criteria.accept("room specifications"));
    }

    #[test]
    fn glob_name() {
        let criteria = Criteria::new("ROOM SPEC*", 1, true);
        assert!(criteria.accept("ROOM SPECIFICATIONS"));
        assert!(!criteria.accept("BRIEF"));
    }

    #[test]
    fn invalid_pattern_falls_back_to_exact_match() {
        let criteria = Criteria::new("Rooms [draft", 1, true);
        assert!(criteria.accept("Rooms [draft"));
        assert!(!criteria.accept("Rooms"));
    }
}
