use crate::traits::{walk, TreeNode};

/// Find the chain of nodes from a root down to the named node
///
/// The search is depth-first, parents before children, and stops at the
/// first match. The returned path starts at the root and ends with the node
/// itself. Returns `None` when no node has that name.
pub fn find_path<'a, T: TreeNode>(forest: &'a [T], name: &str) -> Option<Vec<&'a T>> {
    let mut path: Vec<&'a T> = Vec::new();

    for (depth, node) in walk(forest) {
        // Everything deeper than this node belongs to an earlier branch
        path.truncate(depth);
        path.push(node);
        if node.name() == name {
            return Some(path);
        }
    }

    None
}

/// Find the first node with the given name
pub fn find_node<'a, T: TreeNode>(forest: &'a [T], name: &str) -> Option<&'a T> {
    walk(forest)
        .map(|(_, node)| node)
        .find(|node| node.name() == name)
}

/// Returns true if any node in the forest has the given name
pub fn contains<T: TreeNode>(forest: &[T], name: &str) -> bool {
    find_node(forest, name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupRecord, GroupTreeNode};

    fn node(name: &str, children: Vec<GroupTreeNode>) -> GroupTreeNode {
        let mut node = GroupTreeNode::detached(GroupRecord::new(name, name));
        node.spec.children = children;
        node
    }

    fn names(path: Option<Vec<&GroupTreeNode>>) -> Option<Vec<&str>> {
        path.map(|nodes| nodes.into_iter().map(|n| n.name()).collect())
    }

    #[test]
    fn test_path_after_sibling_branch() {
        let forest = vec![
            node("a", vec![node("a1", vec![node("a1x", vec![])])]),
            node("b", vec![node("b1", vec![])]),
        ];

        assert_eq!(names(find_path(&forest, "b1")), Some(vec!["b", "b1"]));
        assert_eq!(names(find_path(&forest, "a1x")), Some(vec!["a", "a1", "a1x"]));
        assert_eq!(names(find_path(&forest, "a")), Some(vec!["a"]));
        assert_eq!(names(find_path(&forest, "zzz")), None);
    }

    #[test]
    fn test_find_node() {
        let forest = vec![node("a", vec![node("a1", vec![])])];
        assert_eq!(find_node(&forest, "a1").map(|n| n.name()), Some("a1"));
        assert!(contains(&forest, "a"));
        assert!(!contains(&forest, "b"));
        assert!(find_path::<GroupTreeNode>(&[], "a").is_none());
    }
}
