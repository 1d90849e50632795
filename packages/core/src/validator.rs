//! Row validation
//!
//! Checks parsed rows for structural and semantic integrity before tree
//! construction. Validation never fails; it returns an ordered list of
//! human-readable messages, empty when the rows are safe to hand to
//! [`crate::hierarchy::build`].
//!
//! The three stages short-circuit: per-row checks only run when the column
//! structure is sound, and hierarchy-shape checks only run when every row is
//! individually sound. This keeps a single missing column from cascading
//! into one error per row.

use std::collections::HashSet;

use crate::row::{Row, COLUMN_MANAGER_NAME, COLUMN_PARENT_TEAM, COLUMN_TEAM};

/// Columns every upload must carry
pub const REQUIRED_COLUMNS: &[&str] = &[COLUMN_TEAM, COLUMN_PARENT_TEAM, COLUMN_MANAGER_NAME];

/// Validate rows, returning all problems found in one pass.
pub fn validate(rows: &[Row]) -> Vec<String> {
    let mut errors = Vec::new();

    validate_structure(rows, &mut errors);

    if errors.is_empty() {
        validate_teams(rows, &mut errors);

        if errors.is_empty() {
            validate_hierarchy(rows, &mut errors);
        }
    }

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "row validation failed");
    }

    errors
}

/// Stage 1: empty data and required columns, checked against the first row.
fn validate_structure(rows: &[Row], errors: &mut Vec<String>) {
    let Some(first) = rows.first() else {
        errors.push("CSV data is empty".to_string());
        return;
    };

    for column in REQUIRED_COLUMNS {
        if !first.contains(column) {
            errors.push(format!("Missing required column: {column}"));
        }
    }
}

/// Stage 2: per-row required values and duplicate team names.
fn validate_teams(rows: &[Row], errors: &mut Vec<String>) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;

        if row.team().is_empty() {
            errors.push(format!("Team is required in row {row_number}"));
        }

        if row.manager_name().is_empty() {
            errors.push(format!("Manager name is required in row {row_number}"));
        }

        if !seen.insert(row.team()) {
            errors.push(format!(
                "Duplicate team \"{}\" found in row {row_number}",
                row.team()
            ));
        }
    }
}

/// Stage 3: exactly one root, and every other parent reference must resolve.
fn validate_hierarchy(rows: &[Row], errors: &mut Vec<String>) {
    let teams: HashSet<&str> = rows.iter().map(Row::team).collect();

    // Root rows are counted per occurrence: two rows pointing at the same
    // unknown parent are two roots, not one.
    let roots: Vec<&str> = rows
        .iter()
        .map(Row::parent_team)
        .filter(|parent| !teams.contains(parent))
        .collect();

    if roots.len() != 1 {
        errors.push("Hierarchy must have exactly one root node".to_string());
        return;
    }

    let root = roots[0];

    for row in rows {
        if row.parent_team() == root {
            continue;
        }

        if !teams.contains(row.parent_team()) {
            errors.push(format!(
                "Parent team \"{}\" not found for team \"{}\"",
                row.parent_team(),
                row.team()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(team: &str, parent: &str, manager: &str) -> Row {
        [
            ("team", team),
            ("parent_team", parent),
            ("manager_name", manager),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_rows_report_empty_data() {
        assert_eq!(validate(&[]), vec!["CSV data is empty".to_string()]);
    }

    #[test]
    fn missing_columns_reported_per_key() {
        let rows = vec![[("team", "HQ")].into_iter().collect::<Row>()];

        let errors = validate(&rows);

        assert_eq!(
            errors,
            vec![
                "Missing required column: parent_team".to_string(),
                "Missing required column: manager_name".to_string(),
            ]
        );
    }

    #[test]
    fn missing_columns_skip_later_stages() {
        // Duplicate teams must not be reported while the structure is broken.
        let rows = vec![
            [("team", "HQ")].into_iter().collect::<Row>(),
            [("team", "HQ")].into_iter().collect::<Row>(),
        ];

        let errors = validate(&rows);

        assert!(errors.iter().all(|e| e.starts_with("Missing required column")));
    }

    #[test]
    fn empty_team_and_manager_reported_with_row_numbers() {
        let rows = vec![row("HQ", "", "Alice"), row("", "HQ", "")];

        let errors = validate(&rows);

        assert_eq!(
            errors,
            vec![
                "Team is required in row 2".to_string(),
                "Manager name is required in row 2".to_string(),
            ]
        );
    }

    #[test]
    fn duplicate_team_flags_repeated_occurrence_only() {
        let rows = vec![
            row("HQ", "", "Alice"),
            row("Sales", "HQ", "Bob"),
            row("Sales", "HQ", "Carol"),
        ];

        let errors = validate(&rows);

        assert_eq!(errors, vec!["Duplicate team \"Sales\" found in row 3".to_string()]);
    }

    #[test]
    fn two_empty_parents_are_two_roots() {
        let rows = vec![row("HQ", "", "Alice"), row("Annex", "", "Bob")];

        let errors = validate(&rows);

        assert_eq!(
            errors,
            vec!["Hierarchy must have exactly one root node".to_string()]
        );
    }

    #[test]
    fn zero_roots_rejected() {
        // Two rows pointing at each other: every parent resolves, so no root.
        let rows = vec![row("A", "B", "Alice"), row("B", "A", "Bob")];

        let errors = validate(&rows);

        assert_eq!(
            errors,
            vec!["Hierarchy must have exactly one root node".to_string()]
        );
    }

    #[test]
    fn multiple_dangling_parents_rejected_as_root_error() {
        // No dangling-parent messages: the root-count check fires first.
        let rows = vec![
            row("HQ", "", "Alice"),
            row("Sales", "Nowhere", "Bob"),
        ];

        let errors = validate(&rows);

        assert_eq!(
            errors,
            vec!["Hierarchy must have exactly one root node".to_string()]
        );
    }

    #[test]
    fn well_formed_rows_pass() {
        let rows = vec![
            row("HQ", "", "Alice"),
            row("Sales", "HQ", "Bob"),
            row("EMEA", "Sales", "Carol"),
        ];

        assert_eq!(validate(&rows), Vec::<String>::new());
    }
}
