use crate::traits::TreeNode;

/// Rewrite every priority to the node's index among its siblings
///
/// Works on the forest as it is ordered now; it does not sort. Call it after
/// the desired order is in place, e.g. after a drag and drop.
pub fn renumber_priorities<T: TreeNode>(forest: &mut [T]) {
    let mut stack: Vec<&mut [T]> = vec![forest];

    while let Some(siblings) = stack.pop() {
        for (index, node) in siblings.iter_mut().enumerate() {
            node.set_priority(i32::try_from(index).unwrap_or(i32::MAX));
            stack.push(node.children_mut().as_mut_slice());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupRecord, GroupTreeNode};
    use crate::traits::Prioritized;

    #[test]
    fn test_renumber_nested() {
        let mut parent = GroupTreeNode::detached(GroupRecord::new("p", "P").with_priority(40));
        parent.spec.children = vec![
            GroupTreeNode::detached(GroupRecord::new("x", "X").with_priority(9)),
            GroupTreeNode::detached(GroupRecord::new("y", "Y").with_priority(-3)),
        ];
        let mut forest = vec![
            GroupTreeNode::detached(GroupRecord::new("q", "Q").with_priority(7)),
            parent,
        ];

        renumber_priorities(&mut forest);

        assert_eq!(forest[0].priority(), 0);
        assert_eq!(forest[1].priority(), 1);
        let children: Vec<_> = forest[1].spec.children.iter().map(|c| c.priority()).collect();
        assert_eq!(children, vec![0, 1]);
    }
}
