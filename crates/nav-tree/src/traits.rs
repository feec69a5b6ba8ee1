//! Traits shared by the tree operations

/// Anything ordered among its siblings by an integer priority
///
/// Lower priorities sort first.
pub trait Prioritized {
    /// The effective priority (absent values count as 0)
    fn priority(&self) -> i32;

    /// Overwrite the priority
    fn set_priority(&mut self, priority: i32);
}

/// A named node owning an ordered list of child nodes
///
/// Sorting, renumbering, flattening, path lookup and rendering are written
/// against this trait rather than a concrete node type.
pub trait TreeNode: Prioritized + Sized {
    /// Unique name of the node
    fn name(&self) -> &str;

    /// Direct children, in order
    fn children(&self) -> &[Self];

    /// Mutable access to the direct children
    fn children_mut(&mut self) -> &mut Vec<Self>;

    /// Text shown when the tree is rendered
    fn label(&self) -> &str {
        self.name()
    }

    /// Returns true if the node has no children
    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

/// Walk a forest depth-first, parents before children
///
/// Yields each node together with its depth (roots are at depth 0).
pub fn walk<T: TreeNode>(forest: &[T]) -> Walk<'_, T> {
    Walk::new(forest)
}

/// Count every node in a forest
pub fn count_nodes<T: TreeNode>(forest: &[T]) -> usize {
    walk(forest).count()
}

/// Pre-order iterator over a forest, driven by an explicit stack
pub struct Walk<'a, T> {
    stack: Vec<(usize, &'a T)>,
}

impl<'a, T: TreeNode> Walk<'a, T> {
    fn new(forest: &'a [T]) -> Self {
        // Push in reverse so the first root is popped first
        let stack = forest.iter().rev().map(|node| (0, node)).collect();
        Self { stack }
    }
}

impl<'a, T: TreeNode> Iterator for Walk<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, current) = self.stack.pop()?;

        for child in current.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }

        Some((depth, current))
    }
}
