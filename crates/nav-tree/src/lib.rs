//! Navigation group tree
//!
//! Navigation groups are stored as flat records: every group lists the names
//! of its own children and nothing points back at a parent. This crate turns
//! such a flat list into an ordered forest, lets callers edit that forest, and
//! turns it back into flat records ready to be persisted.
//!
//! # Core Concepts
//!
//! - **GroupRecord**: a group as stored, children are names
//! - **GroupTreeNode**: a group in memory, children are nodes it owns
//! - **TreeNode**: trait shared by everything that has a name, a priority and children
//! - **ForestSession**: a forest under edit, plus the snapshot it started from
//!
//! # Example
//!
//! ```
//! use nav_tree::prelude::*;
//!
//! let records = vec![
//!     GroupRecord::new("docs", "Docs").with_children(["guides"]),
//!     GroupRecord::new("guides", "Guides"),
//!     GroupRecord::new("blog", "Blog").with_priority(-1),
//! ];
//!
//! let forest = build_forest(&records).expect("acyclic groups");
//! assert_eq!(forest[0].name(), "blog");
//!
//! let path = find_path(&forest, "guides").expect("guides is in the forest");
//! let names: Vec<_> = path.iter().map(|node| node.name()).collect();
//! assert_eq!(names, ["docs", "guides"]);
//!
//! let flat = flatten_forest(&forest);
//! assert_eq!(flat.len(), 3);
//! ```

mod arena;
mod build;
mod changes;
pub mod edit;
mod error;
mod flatten;
mod model;
mod options;
mod path;
mod priority;
mod render;
mod sort;
mod traits;

pub use arena::{Arena, NodeId};
pub use build::{build_forest, build_forest_with};
pub use changes::{diff_records, ChangeSet};
pub use edit::{ForestSession, TreeCommand};
pub use error::TreeError;
pub use flatten::{flatten_forest, flatten_node};
pub use model::{
    GroupRecord, GroupSpec, GroupTreeNode, GroupTreeSpec, Metadata, GROUP_API_VERSION, GROUP_KIND,
};
pub use options::{BuildOptions, ClaimPolicy};
pub use path::{contains, find_node, find_path};
pub use priority::renumber_priorities;
pub use render::render_forest;
pub use sort::{sort_by_priority, sort_tree, sort_tree_by};
pub use traits::{count_nodes, walk, Prioritized, TreeNode, Walk};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        build_forest, build_forest_with, find_node, find_path, flatten_forest, flatten_node,
        renumber_priorities, sort_tree, BuildOptions, ChangeSet, ClaimPolicy, ForestSession,
        GroupRecord, GroupTreeNode, Metadata, Prioritized, TreeCommand, TreeError, TreeNode,
    };
}
