//! Subtree filtering
//!
//! Cuts a built hierarchy down to the path from the root to a queried team,
//! keeping the matched team's full subtree. The input is never mutated.

use crate::hierarchy::{Hierarchy, TeamNode};

/// Return the smallest hierarchy containing every team named `query`.
///
/// The match is exact and case-sensitive. A matched node keeps its entire
/// subtree; each ancestor on the path is re-wrapped to carry only the
/// filtered branch, dropping its other children. When nothing matches, the
/// original hierarchy is returned unchanged — callers rely on this identity
/// fallback, so a miss must not become an empty result.
pub fn filter_by_team(hierarchy: &Hierarchy, query: &str) -> Hierarchy {
    let filtered = filter_children(hierarchy, query);

    if filtered.is_empty() {
        hierarchy.clone()
    } else {
        filtered
    }
}

fn filter_children(teams: &Hierarchy, query: &str) -> Hierarchy {
    let mut result = Hierarchy::new();

    for (name, node) in teams {
        if name == query {
            result.insert(name.clone(), node.clone());
            continue;
        }

        let matches_below = filter_children(&node.teams, query);

        if !matches_below.is_empty() {
            result.insert(
                name.clone(),
                TeamNode {
                    team_name: node.team_name.clone(),
                    parent_team: node.parent_team.clone(),
                    manager_name: node.manager_name.clone(),
                    business_unit: node.business_unit.clone(),
                    teams: matches_below,
                },
            );
        }
    }

    result
}
