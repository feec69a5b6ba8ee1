use std::cmp::Ordering;

use crate::traits::{Prioritized, TreeNode};

/// Stable sort of a flat list by ascending priority
///
/// Items with equal priority keep their relative order.
pub fn sort_by_priority<T: Prioritized>(items: &mut [T]) {
    items.sort_by_key(|item| item.priority());
}

/// Sort a forest and every sibling list below it by ascending priority
///
/// The sort is stable, so applying it twice changes nothing.
pub fn sort_tree<T: TreeNode>(forest: Vec<T>) -> Vec<T> {
    sort_tree_by(forest, |a, b| a.priority().cmp(&b.priority()))
}

/// Sort a forest and every sibling list below it with a custom comparator
pub fn sort_tree_by<T, F>(mut forest: Vec<T>, mut compare: F) -> Vec<T>
where
    T: TreeNode,
    F: FnMut(&T, &T) -> Ordering,
{
    {
        let mut stack: Vec<&mut Vec<T>> = vec![&mut forest];

        while let Some(siblings) = stack.pop() {
            siblings.sort_by(&mut compare);
            for node in siblings.iter_mut() {
                stack.push(node.children_mut());
            }
        }
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupRecord, GroupTreeNode};

    fn node(name: &str, priority: i32, children: Vec<GroupTreeNode>) -> GroupTreeNode {
        let mut node = GroupTreeNode::detached(GroupRecord::new(name, name).with_priority(priority));
        node.spec.children = children;
        node
    }

    fn names(forest: &[GroupTreeNode]) -> Vec<&str> {
        forest.iter().map(|n| n.name()).collect()
    }

    #[test]
    fn test_sort_records_is_stable() {
        let mut records = vec![
            GroupRecord::new("b", "B").with_priority(1),
            GroupRecord::new("a", "A"),
            GroupRecord::new("c", "C").with_priority(1),
            GroupRecord::new("d", "D").with_priority(0),
        ];
        sort_by_priority(&mut records);
        let order: Vec<_> = records.iter().map(|r| r.name()).collect();
        assert_eq!(order, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_sort_nested() {
        let forest = vec![
            node("z", 2, vec![]),
            node(
                "y",
                1,
                vec![node("y2", 5, vec![]), node("y1", 3, vec![node("only", 7, vec![])])],
            ),
        ];

        let sorted = sort_tree(forest);
        assert_eq!(names(&sorted), vec!["y", "z"]);
        assert_eq!(sorted[0].child_names(), vec!["y1", "y2"]);
        assert_eq!(sorted[0].spec.children[0].child_names(), vec!["only"]);
    }

    #[test]
    fn test_sort_by_comparator() {
        let forest = vec![node("a", 0, vec![]), node("c", 0, vec![]), node("b", 0, vec![])];
        let sorted = sort_tree_by(forest, |a, b| b.name().cmp(a.name()));
        assert_eq!(names(&sorted), vec!["c", "b", "a"]);
    }
}
