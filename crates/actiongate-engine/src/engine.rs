//! Verdict evaluation.

use std::sync::Arc;

use actiongate_core::model::{AccessRequest, RuleSet, ANY_RESOURCE};

use crate::store::PolicyStore;

/// Stateless verdict evaluator over a shared [`PolicyStore`].
///
/// Construct once per agent, then share via `Arc` (cloning is cheap).
/// Evaluation never writes.
#[derive(Clone)]
pub struct PolicyEngine {
    store: Arc<PolicyStore>,
}

impl PolicyEngine {
    pub fn new(store: Arc<PolicyStore>) -> Self {
        Self { store }
    }

    /// Decide whether the request may proceed.
    ///
    /// Runs under a single read guard: one evaluation sees one consistent
    /// snapshot of the rules, and concurrent evaluations never block each
    /// other.
    pub fn evaluate(&self, req: &AccessRequest<'_>) -> bool {
        let state = match self.store.state.read() {
            Ok(state) => state,
            Err(_) => {
                // Poisoned lock means a writer panicked. Deny instead of
                // taking the hot path down with it.
                tracing::error!("policy store lock poisoned, denying");
                return false;
            }
        };

        // An administrator turned enforcement off entirely.
        if !state.enabled {
            return true;
        }

        // Exempt resources skip rule lookup.
        if state.exemptions.contains(req.resource) {
            return true;
        }

        // Unconfigured channels stay closed.
        let Some(resources) = state.channels.get(req.channel) else {
            tracing::debug!(channel = %req.channel, "unconfigured channel, denying");
            return false;
        };

        let mut verdict = false;
        if let Some(tier) = resources.get(req.resource) {
            verdict = apply_tier(tier, req.identity, verdict);
        }

        // The channel-wide wildcard tier runs last and overrides the
        // resource-specific result whenever one of its own sets matches.
        // Emergency lockouts rely on this ordering; do not swap it.
        if let Some(tier) = resources.get(ANY_RESOURCE) {
            verdict = apply_tier(tier, req.identity, verdict);
        }

        verdict
    }
}

/// Allow-then-deny within one tier. Each step only overwrites the verdict on
/// an actual match, so a tier with no matching entry leaves the prior
/// verdict alone.
fn apply_tier(tier: &RuleSet, identity: &str, prior: bool) -> bool {
    let mut verdict = prior;
    if tier.allow_matches(identity) {
        verdict = true;
    }
    if tier.deny_matches(identity) {
        verdict = false;
    }
    verdict
}
