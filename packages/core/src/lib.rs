//! Orgchart Core
//!
//! Turns a flat list of parent-referencing team rows into a rooted JSON
//! hierarchy. This crate is the whole pipeline behind the format-team API:
//! - Parsing uploaded CSV data into header-keyed rows
//! - Validating rows (required columns, duplicates, exactly one root)
//! - Building the nested team tree
//! - Filtering the tree down to a queried team
//!
//! # Example
//!
//! ```
//! use orgchart_core::{build, filter_by_team, read_rows, validate};
//!
//! let csv = "team,parent_team,manager_name\n\
//!            HQ,,Alice\n\
//!            Sales,HQ,Bob\n";
//!
//! let rows = read_rows(csv.as_bytes())?;
//! assert!(validate(&rows).is_empty());
//!
//! let hierarchy = build(&rows)?;
//! let sales_only = filter_by_team(&hierarchy, "Sales");
//! assert!(sales_only["HQ"].teams.contains_key("Sales"));
//! # Ok::<(), orgchart_core::HierarchyError>(())
//! ```

pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod reader;
pub mod row;
pub mod validator;

// Re-export commonly used items
pub use error::{HierarchyError, Result};
pub use filter::filter_by_team;
pub use hierarchy::{build, Hierarchy, TeamNode};
pub use reader::read_rows;
pub use row::{
    Row, COLUMN_BUSINESS_UNIT, COLUMN_MANAGER_NAME, COLUMN_PARENT_TEAM, COLUMN_TEAM,
};
pub use validator::{validate, REQUIRED_COLUMNS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
