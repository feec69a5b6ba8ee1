//! Read-side views over navs and groups, as a theme would consume them

use log::debug;
use nav_tree::{
    build_forest_with, find_node, sort_tree_by, BuildOptions, GroupRecord, GroupTreeNode,
    TreeError,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::nav::NavRecord;
use crate::query::Listed;

/// Name of the pseudo-group collecting navs without a group
pub const UNGROUPED: &str = "ungrouped";

/// A group together with the navs that belong to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedNavs {
    #[serde(flatten)]
    pub group: GroupRecord,
    pub navs: Vec<NavRecord>,
}

fn default_order<T: Listed>(a: &T, b: &T) -> Ordering {
    a.raw_priority()
        .cmp(&b.raw_priority())
        .then_with(|| a.creation_timestamp().cmp(&b.creation_timestamp()))
        .then_with(|| a.record_name().cmp(b.record_name()))
}

/// Priority (absent first), then creation time, then name
pub fn default_nav_order(a: &NavRecord, b: &NavRecord) -> Ordering {
    default_order(a, b)
}

/// Priority (absent first), then creation time, then name
pub fn default_group_order(a: &GroupRecord, b: &GroupRecord) -> Ordering {
    default_order(a, b)
}

/// Sibling order of the server-side group tree
///
/// Priority, then creation time with absent timestamps first, then name.
pub fn tree_node_order(a: &GroupTreeNode, b: &GroupTreeNode) -> Ordering {
    a.spec
        .priority
        .cmp(&b.spec.priority)
        .then_with(|| {
            a.metadata
                .creation_timestamp
                .cmp(&b.metadata.creation_timestamp)
        })
        .then_with(|| a.metadata.name.cmp(&b.metadata.name))
}

/// The pseudo-group that collects navs without a group
pub fn ungrouped_group() -> GroupRecord {
    GroupRecord::new(UNGROUPED, "").with_priority(0)
}

/// Navs of one group that are not being removed, in default order
pub fn navs_in_group(navs: &[NavRecord], group: &str) -> Vec<NavRecord> {
    let mut found: Vec<NavRecord> = navs
        .iter()
        .filter(|nav| !nav.metadata.is_pending_removal() && nav.group_name() == group)
        .cloned()
        .collect();
    found.sort_by(default_nav_order);
    found
}

/// Every group with its navs, followed by the ungrouped navs
///
/// Groups come in default group order. Navs pending removal are left out.
/// The trailing [`UNGROUPED`] entry is always present, possibly empty.
pub fn group_navs(groups: &[GroupRecord], navs: &[NavRecord]) -> Vec<GroupedNavs> {
    let mut live: Vec<&NavRecord> = navs
        .iter()
        .filter(|nav| !nav.metadata.is_pending_removal())
        .collect();
    live.sort_by(|a, b| default_nav_order(a, b));

    let mut ordered: Vec<&GroupRecord> = groups.iter().collect();
    ordered.sort_by(|a, b| default_group_order(a, b));

    let mut grouped: Vec<GroupedNavs> = ordered
        .into_iter()
        .map(|group| GroupedNavs {
            group: group.clone(),
            navs: live
                .iter()
                .filter(|nav| nav.group_name() == group.name())
                .map(|nav| (*nav).clone())
                .collect(),
        })
        .collect();

    let ungrouped: Vec<NavRecord> = live
        .iter()
        .filter(|nav| nav.is_ungrouped())
        .map(|nav| (*nav).clone())
        .collect();
    debug!(
        "grouped {} navs into {} groups, {} ungrouped",
        live.len(),
        grouped.len(),
        ungrouped.len()
    );
    grouped.push(GroupedNavs {
        group: ungrouped_group(),
        navs: ungrouped,
    });

    grouped
}

/// The group hierarchy as served to themes
///
/// Conflicting claims resolve to the last parent. Every sibling list is
/// ordered with [`tree_node_order`]. With a non-empty `name` only that
/// group's subtree is returned, or nothing when no such group exists.
pub fn groups_as_tree(
    groups: &[GroupRecord],
    name: Option<&str>,
) -> Result<Vec<GroupTreeNode>, TreeError> {
    let options = BuildOptions::new().sort(false);
    let forest = sort_tree_by(build_forest_with(groups, &options)?, tree_node_order);

    Ok(match name.filter(|name| !name.is_empty()) {
        Some(name) => find_node(&forest, name).cloned().into_iter().collect(),
        None => forest,
    })
}
