// Navigation items for the menu plugin
// This crate provides nav records, paged list queries and the read-side views
// that combine navs with their groups

mod finder;
mod nav;
mod page;
mod query;

pub use finder::{
    default_group_order, default_nav_order, group_navs, groups_as_tree, navs_in_group,
    tree_node_order, ungrouped_group, GroupedNavs, UNGROUPED,
};
pub use nav::{NavRecord, NavSpec, NAV_KIND};
pub use page::ListResult;
pub use query::{Direction, Listed, NavGroupQuery, NavQuery, Sort, SortField, SortOrder};
