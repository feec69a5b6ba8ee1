//! Arena storage used while reconstructing a forest from flat records

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::model::GroupTreeNode;
use crate::traits::TreeNode;

/// Handle to a slot in an [`Arena`]
///
/// Internally an index into the arena's slot vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// One group waiting to be placed in the forest
#[derive(Debug, Clone)]
struct Slot {
    /// The node, taken out once the forest is assembled
    node: Option<GroupTreeNode>,
    /// Parent picked for this slot
    parent: Option<NodeId>,
    /// Attached children, in attachment order
    children: Vec<NodeId>,
}

/// Name-indexed arena of detached group nodes
///
/// Nodes refer to each other by [`NodeId`] while links are being resolved, so
/// no node owns another until [`Arena::into_forest`] assembles the result.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    slots: Vec<Slot>,
    index: HashMap<String, NodeId>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Store a node
    ///
    /// A node whose name is already stored replaces the earlier one in place
    /// and keeps its id. Returns the id and whether a node was replaced.
    pub fn insert(&mut self, node: GroupTreeNode) -> (NodeId, bool) {
        if let Some(&id) = self.index.get(node.name()) {
            self.slots[id.get()].node = Some(node);
            return (id, true);
        }

        let id = NodeId::new(self.slots.len());
        self.index.insert(node.name().to_string(), id);
        self.slots.push(Slot {
            node: Some(node),
            parent: None,
            children: Vec::new(),
        });
        (id, false)
    }

    /// Look up a node by name
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Ids of every slot, in first-insertion order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.slots.len()).map(NodeId::new)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get a stored node
    ///
    /// Returns `None` for invalid ids or after the forest was assembled.
    pub fn get(&self, id: NodeId) -> Option<&GroupTreeNode> {
        self.slots.get(id.get())?.node.as_ref()
    }

    /// Name of a stored node
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|node| node.name())
    }

    /// Parent attached to a node, if any
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.get())?.parent
    }

    /// Attached children of a node
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.get())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Append `child` to the children of `parent`
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.slots[child.get()].parent = Some(parent);
        self.slots[parent.get()].children.push(child);
    }

    /// Ids reachable from `roots`, parents before children
    ///
    /// A node reachable along several paths is listed once.
    pub fn preorder(&self, roots: &[NodeId]) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.slots.len());
        let mut visited = HashSet::with_capacity(self.slots.len());
        let mut stack: Vec<NodeId> = roots.iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }

        order
    }

    /// Follow parents from `start` and return the first node seen twice
    ///
    /// Returns `None` when the chain ends at a node without a parent.
    pub fn find_cycle(&self, start: NodeId) -> Option<NodeId> {
        let mut seen = HashSet::new();
        let mut current = Some(start);

        while let Some(id) = current {
            if !seen.insert(id) {
                return Some(id);
            }
            current = self.parent(id);
        }

        None
    }

    /// Move the nodes out of the arena, nested under their attached parents
    ///
    /// Nodes not reachable from `roots` are discarded.
    pub fn into_forest(mut self, roots: &[NodeId]) -> Vec<GroupTreeNode> {
        let order = self.preorder(roots);

        // Children come after their parent in pre-order, so walking it
        // backwards finishes every subtree before its parent takes it.
        for &id in order.iter().rev() {
            let child_ids = std::mem::take(&mut self.slots[id.get()].children);
            let children: Vec<GroupTreeNode> = child_ids
                .iter()
                .filter_map(|child| self.slots[child.get()].node.take())
                .collect();

            if let Some(node) = self.slots[id.get()].node.as_mut() {
                node.spec.children = children;
            }
        }

        roots
            .iter()
            .filter_map(|id| self.slots[id.get()].node.take())
            .collect()
    }
}
