//! Administrative mutation facade.

use std::sync::Arc;

use actiongate_core::error::Result;
use actiongate_core::model::Principal;

use crate::config::GuardConfig;
use crate::store::PolicyStore;

/// Mutation facade for configuration tooling.
///
/// Validation and storage live in [`PolicyStore`]; this layer parses
/// principal strings, logs each accepted mutation, and surfaces validation
/// errors unchanged. Every call is synchronous and immediately visible to
/// evaluations.
pub struct AdminInterface {
    store: Arc<PolicyStore>,
}

impl AdminInterface {
    pub fn new(store: Arc<PolicyStore>) -> Self {
        Self { store }
    }

    pub fn set_allow(&self, channel: &str, resource: &str, principal: &str) -> Result<()> {
        let principal = Principal::parse(principal)?;
        self.store.set_allow(channel, resource, principal.clone())?;
        tracing::info!(%channel, %resource, %principal, "allow rule added");
        Ok(())
    }

    pub fn clear_allow(&self, channel: &str, resource: &str, principal: &str) -> Result<()> {
        let principal = Principal::parse(principal)?;
        self.store.clear_allow(channel, resource, &principal)?;
        tracing::info!(%channel, %resource, %principal, "allow rule cleared");
        Ok(())
    }

    pub fn set_deny(&self, channel: &str, resource: &str, principal: &str) -> Result<()> {
        let principal = Principal::parse(principal)?;
        self.store.set_deny(channel, resource, principal.clone())?;
        tracing::info!(%channel, %resource, %principal, "deny rule added");
        Ok(())
    }

    pub fn clear_deny(&self, channel: &str, resource: &str, principal: &str) -> Result<()> {
        let principal = Principal::parse(principal)?;
        self.store.clear_deny(channel, resource, &principal)?;
        tracing::info!(%channel, %resource, %principal, "deny rule cleared");
        Ok(())
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.store.set_enabled(enabled)?;
        tracing::info!(enabled, "enforcement toggled");
        Ok(())
    }

    pub fn add_exemption(&self, resource: &str) -> Result<()> {
        self.store.add_exemption(resource)?;
        tracing::info!(%resource, "exemption added");
        Ok(())
    }

    pub fn remove_exemption(&self, resource: &str) -> Result<()> {
        self.store.remove_exemption(resource)?;
        tracing::info!(%resource, "exemption removed");
        Ok(())
    }

    /// Read-only snapshot of the full rule configuration.
    pub fn dump(&self) -> Result<GuardConfig> {
        self.store.to_config()
    }
}
