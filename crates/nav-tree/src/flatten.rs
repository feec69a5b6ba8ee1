use std::collections::HashMap;

use crate::model::{GroupRecord, GroupSpec, GroupTreeNode};
use crate::traits::{walk, TreeNode};

/// Convert one node to its stored form
///
/// Only the names of the direct children are kept; descendants are not
/// collected. Use this when a single group needs updating.
pub fn flatten_node(node: &GroupTreeNode) -> GroupRecord {
    GroupRecord {
        api_version: node.api_version.clone(),
        kind: node.kind.clone(),
        metadata: node.metadata.clone(),
        spec: GroupSpec {
            display_name: node.spec.display_name.clone(),
            priority: Some(node.spec.priority),
            navs: node.spec.navs.clone(),
            children: node
                .spec
                .children
                .iter()
                .map(|child| child.name().to_string())
                .collect(),
        },
    }
}

impl From<&GroupTreeNode> for GroupRecord {
    fn from(node: &GroupTreeNode) -> Self {
        flatten_node(node)
    }
}

/// Convert a forest back into flat records, one per node
///
/// Nodes are visited depth-first, parents before children. The result keeps
/// the position at which a name was first seen; a repeated name overwrites
/// the earlier record in place.
pub fn flatten_forest(forest: &[GroupTreeNode]) -> Vec<GroupRecord> {
    let mut records: Vec<GroupRecord> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (_, node) in walk(forest) {
        let record = flatten_node(node);
        match positions.get(node.name()) {
            Some(&position) => records[position] = record,
            None => {
                positions.insert(node.name(), records.len());
                records.push(record);
            }
        }
    }

    records
}
