//! Agent registry.

use std::sync::Arc;

use dashmap::DashMap;

use actiongate_core::error::{GateError, Result};

use crate::store::PolicyStore;

/// Agent-id -> store registry for a multi-agent host.
///
/// Lookups are lock-free reads; registration replaces any previous store for
/// the id so a reloaded agent picks up its fresh configuration.
#[derive(Default)]
pub struct GuardRegistry {
    stores: DashMap<String, Arc<PolicyStore>>,
}

impl GuardRegistry {
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
        }
    }

    pub fn register(&self, agent_id: impl Into<String>, store: Arc<PolicyStore>) {
        self.stores.insert(agent_id.into(), store);
    }

    pub fn resolve(&self, agent_id: &str) -> Result<Arc<PolicyStore>> {
        self.stores
            .get(agent_id)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| GateError::UnknownAgent(agent_id.to_string()))
    }

    pub fn remove(&self, agent_id: &str) -> Option<Arc<PolicyStore>> {
        self.stores.remove(agent_id).map(|(_, store)| store)
    }

    pub fn agent_ids(&self) -> Vec<String> {
        self.stores.iter().map(|e| e.key().clone()).collect()
    }
}
