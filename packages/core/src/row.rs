//! Row model for parsed tabular team data
//!
//! A [`Row`] is one record from the uploaded file, keyed by the header names
//! of the file. Keeping rows as string mappings (rather than a fixed struct)
//! lets the validator distinguish a column that is absent from the file from
//! a column that is present but empty.

use std::collections::HashMap;

/// Header name of the team column
pub const COLUMN_TEAM: &str = "team";
/// Header name of the parent team column
pub const COLUMN_PARENT_TEAM: &str = "parent_team";
/// Header name of the manager column
pub const COLUMN_MANAGER_NAME: &str = "manager_name";
/// Header name of the optional business unit column
pub const COLUMN_BUSINESS_UNIT: &str = "business_unit";

/// One parsed record from the uploaded file, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Whether the column exists in this row, even with an empty value
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Column value; a missing column reads as the empty string
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// The `team` column
    pub fn team(&self) -> &str {
        self.get(COLUMN_TEAM)
    }

    /// The `parent_team` column
    pub fn parent_team(&self) -> &str {
        self.get(COLUMN_PARENT_TEAM)
    }

    /// The `manager_name` column
    pub fn manager_name(&self) -> &str {
        self.get(COLUMN_MANAGER_NAME)
    }

    /// The `business_unit` column, empty when the file has no such column
    pub fn business_unit(&self) -> &str {
        self.get(COLUMN_BUSINESS_UNIT)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_reads_as_empty() {
        let row = Row::new();
        assert_eq!(row.team(), "");
        assert_eq!(row.business_unit(), "");
        assert!(!row.contains(COLUMN_TEAM));
    }

    #[test]
    fn present_but_empty_column_is_contained() {
        let row: Row = [(COLUMN_TEAM, "")].into_iter().collect();
        assert!(row.contains(COLUMN_TEAM));
        assert_eq!(row.team(), "");
    }

    #[test]
    fn accessors_read_named_columns() {
        let row: Row = [
            (COLUMN_TEAM, "Sales"),
            (COLUMN_PARENT_TEAM, "HQ"),
            (COLUMN_MANAGER_NAME, "Steph Stephans"),
            (COLUMN_BUSINESS_UNIT, "Commerce"),
        ]
        .into_iter()
        .collect();

        assert_eq!(row.team(), "Sales");
        assert_eq!(row.parent_team(), "HQ");
        assert_eq!(row.manager_name(), "Steph Stephans");
        assert_eq!(row.business_unit(), "Commerce");
    }
}
