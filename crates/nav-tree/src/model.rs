//! Record and node shapes for navigation groups

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::traits::{Prioritized, TreeNode};

/// API version stamped on group records
pub const GROUP_API_VERSION: &str = "core.halo.run/v1alpha1";
/// Kind stamped on group records
pub const GROUP_KIND: &str = "NavGroup";

fn default_api_version() -> String {
    GROUP_API_VERSION.to_string()
}

fn default_kind() -> String {
    GROUP_KIND.to_string()
}

/// Identity and bookkeeping shared by every stored record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Unique key of the record
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// RFC 3339 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    /// RFC 3339 timestamp, set once the backend started removing the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<String>,
}

impl Metadata {
    /// Create metadata carrying only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns true once the backend has started deleting the record
    pub fn is_pending_removal(&self) -> bool {
        self.deletion_timestamp.is_some()
    }
}

/// Stored attributes of a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpec {
    pub display_name: String,
    /// Sibling ordering key, absent means 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Names of navs in this group (deprecated, kept for old records)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navs: Vec<String>,
    /// Names of the direct child groups, in order
    #[serde(default)]
    pub children: Vec<String>,
}

/// A group as the backend stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub metadata: Metadata,
    pub spec: GroupSpec,
}

impl GroupRecord {
    /// Create a childless record with no explicit priority
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: Metadata::new(name),
            spec: GroupSpec {
                display_name: display_name.into(),
                ..GroupSpec::default()
            },
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.spec.priority = Some(priority);
        self
    }

    /// Replace the child name list
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Set the creation timestamp
    pub fn with_creation_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.metadata.creation_timestamp = Some(timestamp.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

impl Prioritized for GroupRecord {
    fn priority(&self) -> i32 {
        self.spec.priority.unwrap_or(0)
    }

    fn set_priority(&mut self, priority: i32) {
        self.spec.priority = Some(priority);
    }
}

/// Attributes of a group in memory, children materialized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTreeSpec {
    pub display_name: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navs: Vec<String>,
    #[serde(default)]
    pub children: Vec<GroupTreeNode>,
}

/// A group in memory; it owns its child nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTreeNode {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub metadata: Metadata,
    pub spec: GroupTreeSpec,
}

impl GroupTreeNode {
    /// Turn a record into a node with no children yet
    ///
    /// The record's child names are dropped; an absent priority becomes 0.
    pub fn detached(record: GroupRecord) -> Self {
        let GroupRecord {
            api_version,
            kind,
            metadata,
            spec,
        } = record;
        Self {
            api_version,
            kind,
            metadata,
            spec: GroupTreeSpec {
                display_name: spec.display_name,
                priority: spec.priority.unwrap_or(0),
                navs: spec.navs,
                children: Vec::new(),
            },
        }
    }

    /// Names of the direct children, in order
    pub fn child_names(&self) -> Vec<&str> {
        self.spec.children.iter().map(|child| child.name()).collect()
    }
}

impl Prioritized for GroupTreeNode {
    fn priority(&self) -> i32 {
        self.spec.priority
    }

    fn set_priority(&mut self, priority: i32) {
        self.spec.priority = priority;
    }
}

impl TreeNode for GroupTreeNode {
    fn name(&self) -> &str {
        &self.metadata.name
    }

    fn label(&self) -> &str {
        &self.spec.display_name
    }

    fn children(&self) -> &[Self] {
        &self.spec.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.spec.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_from_json() {
        let record: GroupRecord = serde_json::from_str(
            r#"{"metadata":{"name":"docs"},"spec":{"displayName":"Docs"}}"#,
        )
        .unwrap();

        assert_eq!(record.api_version, GROUP_API_VERSION);
        assert_eq!(record.kind, GROUP_KIND);
        assert_eq!(record.name(), "docs");
        assert_eq!(record.spec.priority, None);
        assert_eq!(record.priority(), 0);
        assert!(record.spec.children.is_empty());
    }

    #[test]
    fn test_record_json_field_names() {
        let mut record = GroupRecord::new("docs", "Docs")
            .with_priority(2)
            .with_children(["guides"]);
        record.metadata.deletion_timestamp = Some("2024-01-01T00:00:00Z".into());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["apiVersion"], GROUP_API_VERSION);
        assert_eq!(value["spec"]["displayName"], "Docs");
        assert_eq!(value["spec"]["children"][0], "guides");
        assert_eq!(value["metadata"]["deletionTimestamp"], "2024-01-01T00:00:00Z");
        assert!(record.metadata.is_pending_removal());
    }

    #[test]
    fn test_detached_node() {
        let record = GroupRecord::new("docs", "Docs").with_children(["a", "b"]);
        let node = GroupTreeNode::detached(record);

        assert_eq!(node.name(), "docs");
        assert_eq!(node.label(), "Docs");
        assert_eq!(node.priority(), 0);
        assert!(node.is_leaf());
    }
}
