//! Hierarchy building
//!
//! Turns a flat, validated row list into a rooted tree of [`TeamNode`]s.
//! The flat list is an implicit adjacency list keyed by parent name; it is
//! indexed once up front so each node is built in time proportional to its
//! child count rather than by rescanning every row.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{HierarchyError, Result};
use crate::row::Row;

/// One team in the output tree.
///
/// `teams` maps child team name to child node and preserves the order in
/// which children appear in the input rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNode {
    pub team_name: String,
    pub parent_team: String,
    pub manager_name: String,
    pub business_unit: String,
    pub teams: IndexMap<String, TeamNode>,
}

/// The full rooted tree, keyed by root team name.
pub type Hierarchy = IndexMap<String, TeamNode>;

/// Build the team hierarchy from validated rows.
///
/// The root identifier is the first `parent_team` value (in row order) that
/// matches no `team` value; when every parent resolves, the empty string is
/// used as a fallback. Fails with [`HierarchyError::NoRootFound`] when no
/// row carries the root identifier as its parent.
pub fn build(rows: &[Row]) -> Result<Hierarchy> {
    let mut children: HashMap<&str, Vec<&Row>> = HashMap::new();
    for row in rows {
        children.entry(row.parent_team()).or_default().push(row);
    }

    let root_id = root_identifier(rows);

    let root_rows: Vec<&Row> = rows
        .iter()
        .filter(|row| row.parent_team() == root_id)
        .collect();

    if root_rows.is_empty() {
        return Err(HierarchyError::NoRootFound);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut hierarchy = Hierarchy::new();

    for root_row in root_rows {
        let node = build_node(root_row, &children, &mut visited)?;
        hierarchy.insert(root_row.team().to_string(), node);
    }

    tracing::debug!(root = root_id, teams = visited.len(), "built team hierarchy");
    Ok(hierarchy)
}

/// The parent value that resolves to no team, or `""` when all resolve.
fn root_identifier(rows: &[Row]) -> &str {
    let teams: HashSet<&str> = rows.iter().map(Row::team).collect();

    rows.iter()
        .map(Row::parent_team)
        .find(|parent| !teams.contains(parent))
        .unwrap_or("")
}

fn build_node<'a>(
    row: &'a Row,
    children: &HashMap<&'a str, Vec<&'a Row>>,
    visited: &mut HashSet<&'a str>,
) -> Result<TeamNode> {
    // Validated input is acyclic; the guard keeps unvalidated input from
    // recursing forever.
    if !visited.insert(row.team()) {
        return Err(HierarchyError::CircularReference(row.team().to_string()));
    }

    let mut node = TeamNode {
        team_name: row.team().to_string(),
        parent_team: row.parent_team().to_string(),
        manager_name: row.manager_name().to_string(),
        business_unit: row.business_unit().to_string(),
        teams: IndexMap::new(),
    };

    if let Some(child_rows) = children.get(row.team()) {
        for child_row in child_rows {
            let child = build_node(child_row, children, visited)?;
            node.teams.insert(child_row.team().to_string(), child);
        }
    }

    Ok(node)
}
