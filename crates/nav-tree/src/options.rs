//! Configuration options for building a forest.
//!
//! `BuildOptions` decides how conflicting flat data is resolved and whether
//! the built forest is sorted. It deserializes from a partial JSON object,
//! missing fields take their defaults.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// What to do when flat records disagree about ownership
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimPolicy {
    /// A group listed by several parents goes to the last one; a repeated
    /// name keeps the later record.
    #[default]
    #[display(fmt = "last-wins")]
    LastWins,

    /// Conflicting parents and repeated names are errors.
    #[display(fmt = "strict")]
    Strict,
}

impl ClaimPolicy {
    /// Returns true for [`ClaimPolicy::Strict`]
    pub const fn is_strict(self) -> bool {
        matches!(self, ClaimPolicy::Strict)
    }
}

/// Options controlling [`build_forest_with`](crate::build_forest_with).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOptions {
    /// How to resolve conflicting claims and repeated names.
    pub claim_policy: ClaimPolicy,

    /// Whether to sort every sibling list by priority after building.
    pub sort: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            claim_policy: ClaimPolicy::LastWins,
            sort: true,
        }
    }
}

impl BuildOptions {
    /// Create new build options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the claim policy.
    pub fn claim_policy(mut self, policy: ClaimPolicy) -> Self {
        self.claim_policy = policy;
        self
    }

    /// Shorthand for the strict claim policy.
    pub fn strict(self) -> Self {
        self.claim_policy(ClaimPolicy::Strict)
    }

    /// Enable or disable sorting after the build.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}
