//! What each subcommand computes, kept apart from argument parsing and I/O

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use nav_tree::{
    build_forest_with, find_node, find_path, flatten_forest, render_forest, renumber_priorities,
    BuildOptions, ForestSession, GroupRecord, TreeCommand, TreeNode,
};
use navs::{group_navs, NavQuery, NavRecord};
use std::slice;

/// Render the forest, or only the subtree rooted at `name`
pub fn tree(groups: &[GroupRecord], options: &BuildOptions, name: Option<&str>) -> Result<String> {
    let forest = build_forest_with(groups, options)?;

    match name {
        Some(name) => {
            let node = find_node(&forest, name).ok_or_else(|| anyhow!("Group `{}` not found", name))?;
            Ok(render_forest(slice::from_ref(node)))
        }
        None => Ok(render_forest(&forest)),
    }
}

/// The names from a root down to `name`, joined with ` / `
///
/// Returns `None` when the group is not in the forest.
pub fn path(groups: &[GroupRecord], options: &BuildOptions, name: &str) -> Result<Option<String>> {
    let forest = build_forest_with(groups, options)?;

    Ok(find_path(&forest, name).map(|path| {
        path.iter()
            .map(|node| node.name())
            .collect::<Vec<_>>()
            .join(" / ")
    }))
}

/// Flat records as pretty JSON, optionally renumbered first
pub fn flatten(groups: &[GroupRecord], options: &BuildOptions, renumber: bool) -> Result<String> {
    let mut forest = build_forest_with(groups, options)?;
    if renumber {
        renumber_priorities(&mut forest);
    }

    let records = flatten_forest(&forest);
    debug!("Flattened {} groups", records.len());
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Apply edit commands and print the change set needed to persist them
pub fn apply(
    groups: &[GroupRecord],
    options: &BuildOptions,
    commands: Vec<TreeCommand>,
) -> Result<String> {
    let mut session = ForestSession::new(groups, options)?;

    for command in commands {
        let label = command.to_string();
        session
            .apply(command)
            .with_context(|| format!("Failed to {}", label))?;
    }

    let changes = session.commit();
    info!(
        "{} commands: {} upserts, {} deletes",
        session.history().len(),
        changes.upserts.len(),
        changes.deletes.len()
    );
    Ok(serde_json::to_string_pretty(&changes)?)
}

/// Filtered navs as pretty JSON
///
/// With `groups`, every matching nav is listed under its group instead of
/// being paged.
pub fn navs(
    navs: &[NavRecord],
    groups: Option<&[GroupRecord]>,
    query: &NavQuery,
    page: usize,
    size: usize,
) -> Result<String> {
    match groups {
        Some(groups) => {
            let matching: Vec<NavRecord> = navs
                .iter()
                .filter(|nav| query.matches(nav))
                .cloned()
                .collect();
            Ok(serde_json::to_string_pretty(&group_navs(groups, &matching))?)
        }
        None => Ok(serde_json::to_string_pretty(&query.list(navs, page, size))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<GroupRecord> {
        vec![
            GroupRecord::new("main", "Main").with_children(["docs"]),
            GroupRecord::new("docs", "Docs"),
            GroupRecord::new("footer", "Footer").with_priority(1),
        ]
    }

    #[test]
    fn test_tree_subtree() {
        let options = BuildOptions::default();
        assert_eq!(tree(&groups(), &options, None).unwrap(), "Main\n└── Docs\nFooter\n");
        assert_eq!(tree(&groups(), &options, Some("docs")).unwrap(), "Docs\n");
        assert!(tree(&groups(), &options, Some("nope")).is_err());
    }

    #[test]
    fn test_path() {
        let options = BuildOptions::default();
        assert_eq!(
            path(&groups(), &options, "docs").unwrap(),
            Some("main / docs".to_string())
        );
        assert_eq!(path(&groups(), &options, "nope").unwrap(), None);
    }
}
