use nav_tree::{Metadata, Prioritized, GROUP_API_VERSION};
use serde::{Deserialize, Serialize};

/// Kind stamped on nav records
pub const NAV_KIND: &str = "Nav";

fn default_api_version() -> String {
    GROUP_API_VERSION.to_string()
}

fn default_kind() -> String {
    NAV_KIND.to_string()
}

/// Stored attributes of a navigation link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSpec {
    /// Target of the link
    pub url: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordering key inside the group; absent sorts before any value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Name of the owning group; blank means ungrouped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

/// A navigation link as the backend stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavRecord {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub metadata: Metadata,
    pub spec: NavSpec,
}

impl NavRecord {
    /// Create an ungrouped nav with no priority
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: Metadata::new(name),
            spec: NavSpec {
                url: url.into(),
                display_name: display_name.into(),
                ..NavSpec::default()
            },
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.spec.group_name = Some(group.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.spec.priority = Some(priority);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = Some(description.into());
        self
    }

    pub fn with_creation_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.metadata.creation_timestamp = Some(timestamp.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// The owning group name, empty when unset
    pub fn group_name(&self) -> &str {
        self.spec.group_name.as_deref().unwrap_or_default()
    }

    /// Returns true when the nav belongs to no group
    pub fn is_ungrouped(&self) -> bool {
        self.group_name().trim().is_empty()
    }
}

impl Prioritized for NavRecord {
    fn priority(&self) -> i32 {
        self.spec.priority.unwrap_or(0)
    }

    fn set_priority(&mut self, priority: i32) {
        self.spec.priority = Some(priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_nav() {
        let json = r#"{"metadata":{"name":"halo"},"spec":{"url":"https://halo.run","displayName":"Halo"}}"#;
        let nav: NavRecord = serde_json::from_str(json).unwrap();

        assert_eq!(nav.kind, NAV_KIND);
        assert_eq!(nav.api_version, GROUP_API_VERSION);
        assert_eq!(nav.name(), "halo");
        assert_eq!(nav.group_name(), "");
        assert!(nav.is_ungrouped());
        assert_eq!(nav.priority(), 0);
    }

    #[test]
    fn test_blank_group_is_ungrouped() {
        let nav = NavRecord::new("a", "A", "/a").with_group("  ");
        assert!(nav.is_ungrouped());
        assert!(!nav.with_group("tools").is_ungrouped());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let nav = NavRecord::new("a", "A", "/a").with_priority(2);
        let value = serde_json::to_value(&nav).unwrap();

        assert_eq!(value["spec"]["priority"], 2);
        assert_eq!(value["spec"]["displayName"], "A");
        assert!(value["spec"].get("groupName").is_none());
        assert!(value["metadata"].get("creationTimestamp").is_none());
    }
}
