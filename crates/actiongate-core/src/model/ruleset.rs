//! Allow/deny rule pair scoped to one (channel, resource).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::principal::Principal;

/// Allow/deny sets for one (channel, resource) scope.
///
/// Ordered sets keep dumps and written-back documents deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    /// Principals granted access.
    #[serde(default)]
    pub allow: BTreeSet<Principal>,
    /// Principals refused access. Wins over `allow` within this scope.
    #[serde(default)]
    pub deny: BTreeSet<Principal>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }

    /// True when the allow set matches `identity` (direct hit or `ALL`).
    pub fn allow_matches(&self, identity: &str) -> bool {
        self.allow.iter().any(|p| p.matches(identity))
    }

    /// True when the deny set matches `identity` (direct hit or `ALL`).
    pub fn deny_matches(&self, identity: &str) -> bool {
        self.deny.iter().any(|p| p.matches(identity))
    }
}
