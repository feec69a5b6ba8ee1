//! Edits applied to a forest as values
//!
//! Each [`TreeCommand`] turns the current forest into a new one. The input is
//! never touched, so a failed command leaves the caller's forest as it was.
//! [`ForestSession`] keeps the current forest together with the snapshot it
//! was built from and works out what has to be persisted.

use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::build::build_forest_with;
use crate::changes::{diff_records, ChangeSet};
use crate::error::TreeError;
use crate::flatten::flatten_forest;
use crate::model::{GroupRecord, GroupTreeNode};
use crate::options::BuildOptions;
use crate::path::{contains, find_path};
use crate::priority::renumber_priorities;
use crate::traits::TreeNode;

/// A single edit of a group forest
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum TreeCommand {
    /// Detach a group with its subtree and insert it under `parent` (root
    /// level when `None`) at `index` (appended when `None`)
    #[display(fmt = "move `{}`", name)]
    Move {
        name: String,
        #[serde(default)]
        parent: Option<String>,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Detach a group; its children become roots
    #[display(fmt = "remove `{}`", name)]
    Remove { name: String },

    /// Add a new group without children
    #[display(fmt = "insert `{}`", "record.name()")]
    Insert {
        record: GroupRecord,
        #[serde(default)]
        parent: Option<String>,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Change the display name of a group
    #[display(fmt = "rename `{}`", name)]
    Rename {
        name: String,
        #[serde(rename = "displayName")]
        display_name: String,
    },
}

/// Apply a command and return the resulting forest
pub fn apply(forest: &[GroupTreeNode], command: &TreeCommand) -> Result<Vec<GroupTreeNode>, TreeError> {
    let mut next = forest.to_vec();

    match command {
        TreeCommand::Move {
            name,
            parent,
            index,
        } => {
            if let Some(parent) = parent {
                let path = find_path(&next, parent).ok_or_else(|| TreeError::not_found(parent))?;
                if path.iter().any(|node| node.name() == name.as_str()) {
                    return Err(TreeError::MoveIntoDescendant {
                        name: name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
            let node = detach(&mut next, name).ok_or_else(|| TreeError::not_found(name))?;
            insert(&mut next, parent.as_deref(), *index, node)?;
        }
        TreeCommand::Remove { name } => {
            let mut node = detach(&mut next, name).ok_or_else(|| TreeError::not_found(name))?;
            next.append(node.children_mut());
        }
        TreeCommand::Insert {
            record,
            parent,
            index,
        } => {
            if contains(&next, record.name()) {
                return Err(TreeError::DuplicateName {
                    name: record.name().to_string(),
                });
            }
            let node = GroupTreeNode::detached(record.clone());
            insert(&mut next, parent.as_deref(), *index, node)?;
        }
        TreeCommand::Rename { name, display_name } => {
            let node = find_mut(&mut next, name).ok_or_else(|| TreeError::not_found(name))?;
            node.spec.display_name = display_name.clone();
        }
    }

    debug!("applied {}", command);
    Ok(next)
}

/// Take the named node, with its subtree, out of the forest
fn detach<T: TreeNode>(forest: &mut Vec<T>, name: &str) -> Option<T> {
    let mut stack: Vec<&mut Vec<T>> = vec![forest];

    while let Some(siblings) = stack.pop() {
        if let Some(index) = siblings.iter().position(|node| node.name() == name) {
            return Some(siblings.remove(index));
        }
        for node in siblings.iter_mut() {
            stack.push(node.children_mut());
        }
    }

    None
}

fn find_mut<'a, T: TreeNode>(forest: &'a mut [T], name: &str) -> Option<&'a mut T> {
    let mut stack: Vec<&'a mut T> = forest.iter_mut().collect();

    while let Some(node) = stack.pop() {
        if node.name() == name {
            return Some(node);
        }
        stack.extend(node.children_mut().iter_mut());
    }

    None
}

fn insert<T: TreeNode>(
    forest: &mut Vec<T>,
    parent: Option<&str>,
    index: Option<usize>,
    node: T,
) -> Result<(), TreeError> {
    let siblings = match parent {
        None => forest,
        Some(parent) => find_mut(forest, parent)
            .ok_or_else(|| TreeError::not_found(parent))?
            .children_mut(),
    };
    let at = index.map_or(siblings.len(), |index| index.min(siblings.len()));
    siblings.insert(at, node);
    Ok(())
}

/// A forest under edit
///
/// The session remembers the records it was built from, so
/// [`ForestSession::commit`] reports every stored record that no longer
/// matches the edited forest. That includes child references the build had
/// to resolve away, such as unknown names or a child claimed twice.
#[derive(Debug, Clone)]
pub struct ForestSession {
    baseline: Vec<GroupRecord>,
    current: Vec<GroupTreeNode>,
    history: Vec<TreeCommand>,
}

impl ForestSession {
    /// Build a session from fetched records
    pub fn new(records: &[GroupRecord], options: &BuildOptions) -> Result<Self, TreeError> {
        let current = build_forest_with(records, options)?;
        let baseline = records
            .iter()
            .cloned()
            .map(|mut record| {
                // absent priority reads as 0
                record.spec.priority.get_or_insert(0);
                record
            })
            .collect();
        Ok(Self {
            baseline,
            current,
            history: Vec::new(),
        })
    }

    /// The forest as edited so far
    pub fn forest(&self) -> &[GroupTreeNode] {
        &self.current
    }

    /// The stored records the session started from, priorities filled in
    pub fn baseline(&self) -> &[GroupRecord] {
        &self.baseline
    }

    /// Commands applied so far, oldest first
    pub fn history(&self) -> &[TreeCommand] {
        &self.history
    }

    /// Apply a command, replacing the current forest on success
    pub fn apply(&mut self, command: TreeCommand) -> Result<&[GroupTreeNode], TreeError> {
        self.current = apply(&self.current, &command)?;
        self.history.push(command);
        Ok(&self.current)
    }

    /// Apply commands in order, stopping at the first failure
    pub fn apply_all<I>(&mut self, commands: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = TreeCommand>,
    {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// The current forest with priorities renumbered to sibling order
    pub fn renumbered(&self) -> Vec<GroupTreeNode> {
        let mut forest = self.current.clone();
        renumber_priorities(&mut forest);
        forest
    }

    /// Renumber, flatten and compare against the baseline
    pub fn commit(&self) -> ChangeSet {
        let changes = diff_records(&self.baseline, &flatten_forest(&self.renumbered()));
        debug!(
            "{} commands produced {} upserts and {} deletes",
            self.history.len(),
            changes.upserts.len(),
            changes.deletes.len()
        );
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<GroupTreeNode> {
        let records = vec![
            GroupRecord::new("a", "A").with_children(["a1", "a2"]),
            GroupRecord::new("a1", "A1").with_children(["a1x"]),
            GroupRecord::new("a1x", "A1x"),
            GroupRecord::new("a2", "A2"),
            GroupRecord::new("b", "B"),
        ];
        crate::build::build_forest(&records).unwrap()
    }

    #[test]
    fn test_detach_nested() {
        let mut forest = forest();
        let node = detach(&mut forest, "a1").unwrap();
        assert_eq!(node.child_names(), vec!["a1x"]);
        assert_eq!(forest[0].child_names(), vec!["a2"]);
        assert!(detach(&mut forest, "a1x").is_none());
    }

    #[test]
    fn test_find_mut_and_insert() {
        let mut forest = forest();
        let extra = GroupTreeNode::detached(GroupRecord::new("c", "C"));
        insert(&mut forest, Some("a1x"), Some(10), extra).unwrap();
        assert_eq!(find_mut(&mut forest, "a1x").unwrap().child_names(), vec!["c"]);

        let missing = GroupTreeNode::detached(GroupRecord::new("d", "D"));
        assert_eq!(
            insert(&mut forest, Some("nope"), None, missing),
            Err(TreeError::not_found("nope"))
        );
    }

    #[test]
    fn test_command_display_and_json() {
        let command: TreeCommand =
            serde_json::from_str(r#"{"op":"move","name":"a2","parent":"b","index":0}"#).unwrap();
        assert_eq!(
            command,
            TreeCommand::Move {
                name: "a2".into(),
                parent: Some("b".into()),
                index: Some(0),
            }
        );
        assert_eq!(command.to_string(), "move `a2`");

        let command: TreeCommand =
            serde_json::from_str(r#"{"op":"rename","name":"b","displayName":"Bee"}"#).unwrap();
        assert_eq!(command.to_string(), "rename `b`");
    }
}
