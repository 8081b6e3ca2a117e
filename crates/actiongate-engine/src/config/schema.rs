use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use actiongate_core::error::{GateError, Result};
use actiongate_core::model::{Principal, RuleSet, ANY_RESOURCE, DEFAULT_CHANNEL};

/// Supported document version.
pub const CONFIG_VERSION: u32 = 1;

/// Persisted access-control document for one agent.
///
/// Layout: `channels: {channel: {resource: {allow: [...], deny: [...]}}}`
/// plus the master switch and the exception list. Loaded at agent start,
/// written back on administrative change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub version: u32,

    /// Master enforcement switch. Disabled means every request passes.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Resources that always pass, regardless of rules.
    #[serde(default)]
    pub exceptions: BTreeSet<String>,

    /// channel -> resource -> allow/deny sets.
    #[serde(default)]
    pub channels: BTreeMap<String, BTreeMap<String, RuleSet>>,
}

fn default_enabled() -> bool {
    true
}

impl GuardConfig {
    /// Built-in rules used when an agent ships no document of its own:
    /// everyone allowed on the stock channels until an administrator says
    /// otherwise.
    pub fn builtin() -> Self {
        let mut open = RuleSet::default();
        open.allow.insert(Principal::All);

        let mut channels = BTreeMap::new();
        for channel in [DEFAULT_CHANNEL, "whatsapp"] {
            let mut resources = BTreeMap::new();
            resources.insert(ANY_RESOURCE.to_string(), open.clone());
            channels.insert(channel.to_string(), resources);
        }

        Self {
            version: CONFIG_VERSION,
            enabled: true,
            exceptions: BTreeSet::new(),
            channels,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(GateError::UnsupportedVersion);
        }

        for (channel, resources) in &self.channels {
            if channel.trim().is_empty() {
                return Err(GateError::BadConfig("empty channel name".into()));
            }
            for resource in resources.keys() {
                if resource.trim().is_empty() {
                    return Err(GateError::BadConfig(format!(
                        "channel {channel}: empty resource name"
                    )));
                }
            }
        }

        for resource in &self.exceptions {
            if resource.trim().is_empty() {
                return Err(GateError::BadConfig("empty exception name".into()));
            }
        }

        Ok(())
    }
}
