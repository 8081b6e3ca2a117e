//! Lock-guarded rule storage.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockWriteGuard};

use actiongate_core::error::{GateError, Result};
use actiongate_core::model::{Principal, RuleSet};

use crate::config::schema::{GuardConfig, CONFIG_VERSION};

/// Nested rule state guarded by the store lock.
#[derive(Debug)]
pub(crate) struct StoreState {
    /// channel -> resource -> allow/deny sets.
    pub(crate) channels: BTreeMap<String, BTreeMap<String, RuleSet>>,
    /// Master enforcement switch.
    pub(crate) enabled: bool,
    /// Resources that always pass.
    pub(crate) exemptions: BTreeSet<String>,
}

/// Per-agent rule storage.
///
/// All access goes through `&self` methods behind a single `RwLock`, so an
/// evaluation holding the read guard never observes a half-applied update
/// and admin writes wait only for in-flight readers.
/// Construct once at agent load, then share via `Arc`.
#[derive(Debug)]
pub struct PolicyStore {
    pub(crate) state: RwLock<StoreState>,
}

impl PolicyStore {
    /// Store carrying the built-in default rules.
    pub fn new() -> Self {
        Self::from_config(GuardConfig::builtin())
    }

    /// Build a store from a loaded (already validated) document.
    pub fn from_config(cfg: GuardConfig) -> Self {
        Self {
            state: RwLock::new(StoreState {
                channels: cfg.channels,
                enabled: cfg.enabled,
                exemptions: cfg.exceptions,
            }),
        }
    }

    /// Snapshot the full configuration for display, editing, or write-back.
    pub fn to_config(&self) -> Result<GuardConfig> {
        let s = self
            .state
            .read()
            .map_err(|_| GateError::Internal("policy store lock poisoned".into()))?;
        Ok(GuardConfig {
            version: CONFIG_VERSION,
            enabled: s.enabled,
            exceptions: s.exemptions.clone(),
            channels: s.channels.clone(),
        })
    }

    /// Pure lookup; absence is a normal case, not an error.
    pub fn get_rule(&self, channel: &str, resource: &str) -> Option<RuleSet> {
        self.state.read().ok().and_then(|s| {
            s.channels
                .get(channel)
                .and_then(|resources| resources.get(resource))
                .cloned()
        })
    }

    pub fn has_channel(&self, channel: &str) -> bool {
        self.state
            .read()
            .map(|s| s.channels.contains_key(channel))
            .unwrap_or(false)
    }

    pub fn set_allow(&self, channel: &str, resource: &str, principal: Principal) -> Result<()> {
        validate_scope(channel, resource)?;
        let mut s = self.write()?;
        rule_entry(&mut s, channel, resource).allow.insert(principal);
        Ok(())
    }

    pub fn set_deny(&self, channel: &str, resource: &str, principal: Principal) -> Result<()> {
        validate_scope(channel, resource)?;
        let mut s = self.write()?;
        rule_entry(&mut s, channel, resource).deny.insert(principal);
        Ok(())
    }

    /// Remove one allow entry. No-op when the entry or scope is absent.
    pub fn clear_allow(&self, channel: &str, resource: &str, principal: &Principal) -> Result<()> {
        validate_scope(channel, resource)?;
        let mut s = self.write()?;
        if let Some(rule) = s.channels.get_mut(channel).and_then(|r| r.get_mut(resource)) {
            rule.allow.remove(principal);
        }
        Ok(())
    }

    /// Remove one deny entry. No-op when the entry or scope is absent.
    pub fn clear_deny(&self, channel: &str, resource: &str, principal: &Principal) -> Result<()> {
        validate_scope(channel, resource)?;
        let mut s = self.write()?;
        if let Some(rule) = s.channels.get_mut(channel).and_then(|r| r.get_mut(resource)) {
            rule.deny.remove(principal);
        }
        Ok(())
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.write()?.enabled = enabled;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        // Poisoned lock: report enforcement as active rather than panic.
        self.state.read().map(|s| s.enabled).unwrap_or(true)
    }

    pub fn add_exemption(&self, resource: &str) -> Result<()> {
        validate_name("resource", resource)?;
        self.write()?.exemptions.insert(resource.to_string());
        Ok(())
    }

    pub fn remove_exemption(&self, resource: &str) -> Result<()> {
        self.write()?.exemptions.remove(resource);
        Ok(())
    }

    pub fn is_exempt(&self, resource: &str) -> bool {
        self.state
            .read()
            .map(|s| s.exemptions.contains(resource))
            .unwrap_or(false)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>> {
        // Poisoned lock means a writer panicked; surface it instead of
        // propagating the panic into admin tooling.
        self.state
            .write()
            .map_err(|_| GateError::Internal("policy store lock poisoned".into()))
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new()
    }
}

fn rule_entry<'a>(s: &'a mut StoreState, channel: &str, resource: &str) -> &'a mut RuleSet {
    s.channels
        .entry(channel.to_string())
        .or_default()
        .entry(resource.to_string())
        .or_default()
}

fn validate_scope(channel: &str, resource: &str) -> Result<()> {
    validate_name("channel", channel)?;
    validate_name("resource", resource)
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GateError::InvalidInput(format!("empty {kind} name")));
    }
    Ok(())
}
