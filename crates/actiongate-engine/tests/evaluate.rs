//! Verdict evaluation: tier precedence, wildcard ordering, fail modes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use actiongate_core::model::AccessRequest;
use actiongate_engine::{config, PolicyEngine, PolicyStore};

fn engine_from_yaml(doc: &str) -> PolicyEngine {
    let cfg = config::load_from_str(doc).expect("test document must parse");
    PolicyEngine::new(Arc::new(PolicyStore::from_config(cfg)))
}

#[test]
fn channel_wide_allow_all_admits_anyone() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  whatsapp:
    ANY:
      allow: ["ALL"]
"#,
    );
    let req = AccessRequest::new("user123", "send_message").on_channel("whatsapp");
    assert!(engine.evaluate(&req));
}

#[test]
fn wildcard_deny_singles_out_one_identity() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  whatsapp:
    ANY:
      allow: ["ALL"]
      deny: ["user123"]
"#,
    );
    let denied = AccessRequest::new("user123", "send_message").on_channel("whatsapp");
    let passing = AccessRequest::new("user456", "send_message").on_channel("whatsapp");
    assert!(!engine.evaluate(&denied));
    assert!(engine.evaluate(&passing));
}

#[test]
fn specific_verdict_survives_non_matching_wildcard_tier() {
    // The wildcard tier exists but matches nothing, so the resource-specific
    // allow must stand.
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  default:
    send_message:
      allow: ["user123"]
    ANY: {}
"#,
    );
    let req = AccessRequest::new("user123", "send_message");
    assert!(engine.evaluate(&req));
    assert!(!engine.evaluate(&AccessRequest::new("user456", "send_message")));
}

#[test]
fn specific_allow_without_wildcard_tier() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  default:
    send_message:
      allow: ["user123"]
"#,
    );
    assert!(engine.evaluate(&AccessRequest::new("user123", "send_message")));
    assert!(!engine.evaluate(&AccessRequest::new("user456", "send_message")));
}

#[test]
fn wildcard_tier_overrides_specific_allow() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  default:
    send_message:
      allow: ["user123"]
    ANY:
      deny: ["ALL"]
"#,
    );
    assert!(!engine.evaluate(&AccessRequest::new("user123", "send_message")));
}

#[test]
fn wildcard_tier_overrides_specific_deny() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  default:
    send_message:
      deny: ["user123"]
    ANY:
      allow: ["ALL"]
"#,
    );
    assert!(engine.evaluate(&AccessRequest::new("user123", "send_message")));
}

#[test]
fn deny_beats_allow_within_one_tier() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  default:
    send_message:
      allow: ["ALL"]
      deny: ["ALL"]
"#,
    );
    assert!(!engine.evaluate(&AccessRequest::new("user123", "send_message")));
}

#[test]
fn unconfigured_channel_fails_closed() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  default:
    ANY:
      allow: ["ALL"]
"#,
    );
    let req = AccessRequest::new("user123", "send_message").on_channel("telegram");
    assert!(!engine.evaluate(&req));
}

#[test]
fn unconfigured_resource_fails_closed() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  default:
    send_message:
      allow: ["user123"]
"#,
    );
    assert!(!engine.evaluate(&AccessRequest::new("user123", "delete_history")));
}

#[test]
fn disabled_store_fails_open() {
    // Rules deny everyone, but enforcement is off.
    let engine = engine_from_yaml(
        r#"
version: 1
enabled: false
channels:
  default:
    ANY:
      deny: ["ALL"]
"#,
    );
    assert!(engine.evaluate(&AccessRequest::new("user123", "send_message")));
    assert!(engine.evaluate(&AccessRequest::new("user123", "anything").on_channel("nowhere")));
}

#[test]
fn exempt_resource_bypasses_rules() {
    let engine = engine_from_yaml(
        r#"
version: 1
exceptions: ["health_ping"]
channels:
  default:
    ANY:
      deny: ["ALL"]
"#,
    );
    assert!(engine.evaluate(&AccessRequest::new("user123", "health_ping")));
    // Even on a channel with no configuration at all.
    assert!(engine.evaluate(&AccessRequest::new("user123", "health_ping").on_channel("telegram")));
    assert!(!engine.evaluate(&AccessRequest::new("user123", "send_message")));
}

#[test]
fn evaluation_is_idempotent() {
    let engine = engine_from_yaml(
        r#"
version: 1
channels:
  whatsapp:
    ANY:
      allow: ["ALL"]
      deny: ["user123"]
"#,
    );
    let req = AccessRequest::new("user123", "send_message").on_channel("whatsapp");
    let first = engine.evaluate(&req);
    for _ in 0..10 {
        assert_eq!(engine.evaluate(&req), first);
    }
}

#[test]
fn builtin_rules_admit_anyone_on_stock_channels() {
    let engine = PolicyEngine::new(Arc::new(PolicyStore::new()));
    assert!(engine.evaluate(&AccessRequest::new("user123", "send_message")));
    assert!(engine.evaluate(&AccessRequest::new("user123", "send_message").on_channel("whatsapp")));
    assert!(!engine.evaluate(&AccessRequest::new("user123", "send_message").on_channel("telegram")));
}
