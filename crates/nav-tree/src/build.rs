//! Reconstruct a forest from flat group records

use log::{debug, trace, warn};
use std::collections::HashMap;

use crate::arena::{Arena, NodeId};
use crate::error::TreeError;
use crate::model::{GroupRecord, GroupTreeNode};
use crate::options::BuildOptions;
use crate::sort::sort_tree;

/// Build a sorted forest using the default options
pub fn build_forest(records: &[GroupRecord]) -> Result<Vec<GroupTreeNode>, TreeError> {
    build_forest_with(records, &BuildOptions::default())
}

/// Build a forest from flat records
///
/// Every record is copied, so the forest never aliases `records`. A record is
/// a root when no other record lists it as a child. Children keep the order
/// in which their records appear in `records` until the forest is sorted.
///
/// Child lists are read from every record, including records later replaced
/// by a namesake; the claims go to whichever record ends up owning the name.
/// A group claimed by a record with an empty name is neither attached nor
/// made a root, and is left out of the forest together with its subtree.
///
/// # Errors
///
/// - [`TreeError::Cycle`] when parent links loop, which would leave records
///   outside the forest.
/// - [`TreeError::DuplicateName`] and [`TreeError::ConflictingParent`] under
///   [`ClaimPolicy::Strict`](crate::ClaimPolicy::Strict).
pub fn build_forest_with(
    records: &[GroupRecord],
    options: &BuildOptions,
) -> Result<Vec<GroupTreeNode>, TreeError> {
    let strict = options.claim_policy.is_strict();
    let mut arena = Arena::with_capacity(records.len());

    for record in records {
        let (id, replaced) = arena.insert(GroupTreeNode::detached(record.clone()));
        if replaced {
            if strict {
                return Err(TreeError::DuplicateName {
                    name: record.name().to_string(),
                });
            }
            warn!("group `{}` listed twice, keeping the later record ({})", record.name(), id);
        }
    }

    let (claims, dangling) = collect_claims(records, &arena, strict)?;

    let mut roots = Vec::new();
    let mut orphans = Vec::new();
    for id in arena.ids() {
        match claims.get(&id) {
            Some(&parent) if arena.name(parent).is_some_and(|name| !name.is_empty()) => {
                arena.attach(parent, id);
            }
            Some(_) => orphans.push(id),
            None => roots.push(id),
        }
    }

    let mut reached = arena.preorder(&roots);
    let placed = reached.len();
    reached.extend(arena.preorder(&orphans));
    if reached.len() < arena.len() {
        return Err(first_cycle(&arena, &reached));
    }
    if !orphans.is_empty() {
        warn!(
            "{} groups claimed by a group without a name were left out",
            reached.len() - placed
        );
    }

    debug!(
        "built {} roots from {} groups ({} dangling child references ignored)",
        roots.len(),
        arena.len(),
        dangling
    );

    let forest = arena.into_forest(&roots);
    Ok(if options.sort { sort_tree(forest) } else { forest })
}

/// Map each claimed child to the parent that keeps it
///
/// Records are scanned in input order and the last claim wins unless the
/// policy is strict, in which case a claim by a second, different parent is
/// an error. Claims on names with no record are dropped and counted.
fn collect_claims(
    records: &[GroupRecord],
    arena: &Arena,
    strict: bool,
) -> Result<(HashMap<NodeId, NodeId>, usize), TreeError> {
    let mut claims: HashMap<NodeId, NodeId> = HashMap::new();
    let mut dangling = 0;

    for record in records {
        let Some(parent) = arena.lookup(record.name()) else {
            continue;
        };
        for child_name in &record.spec.children {
            let Some(child) = arena.lookup(child_name) else {
                trace!("group `{}` lists unknown child `{}`", record.name(), child_name);
                dangling += 1;
                continue;
            };
            let Some(previous) = claims.insert(child, parent) else {
                continue;
            };
            if previous == parent {
                continue;
            }

            let first = arena.name(previous).unwrap_or_default().to_string();
            let second = record.name().to_string();
            if strict {
                return Err(TreeError::ConflictingParent {
                    child: child_name.clone(),
                    first,
                    second,
                });
            }
            debug!(
                "group `{}` claimed by `{}` and `{}`, keeping `{}`",
                child_name, first, second, second
            );
        }
    }

    Ok((claims, dangling))
}

fn first_cycle(arena: &Arena, placed: &[NodeId]) -> TreeError {
    let placed: std::collections::HashSet<NodeId> = placed.iter().copied().collect();
    let name = arena
        .ids()
        .filter(|id| !placed.contains(id))
        .find_map(|id| arena.find_cycle(id))
        .and_then(|id| arena.name(id))
        .unwrap_or_default()
        .to_string();
    TreeError::Cycle { name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TreeNode;

    #[test]
    fn test_empty_input() {
        let forest = build_forest(&[]).unwrap();
        assert!(forest.is_empty());
    }

    #[test]
    fn test_input_is_not_aliased() {
        let records = vec![
            GroupRecord::new("a", "A").with_children(["b"]),
            GroupRecord::new("b", "B"),
        ];
        let mut forest = build_forest(&records).unwrap();
        forest[0].spec.display_name = "changed".into();
        forest[0].spec.children.clear();

        assert_eq!(records[0].spec.display_name, "A");
        assert_eq!(records[0].spec.children, vec!["b".to_string()]);
    }

    #[test]
    fn test_unsorted_build_keeps_input_order() {
        let records = vec![
            GroupRecord::new("late", "Late").with_priority(9),
            GroupRecord::new("early", "Early").with_priority(1),
        ];
        let forest = build_forest_with(&records, &BuildOptions::new().sort(false)).unwrap();
        let names: Vec<_> = forest.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["late", "early"]);
    }
}
