#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use actiongate_engine::config::GuardConfig;
use actiongate_engine::{config, PolicyStore};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
channels:
  default:
    ANY:
      allowz: ["ALL"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.admin_code().as_str(), "BAD_CONFIG");
}

#[test]
fn deny_unknown_top_level_fields() {
    let bad = r#"
version: 1
exception: ["typo"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.admin_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert!(cfg.enabled);
    assert!(cfg.exceptions.is_empty());
    assert!(cfg.channels.is_empty());
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.admin_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn empty_channel_name_rejected() {
    let bad = r#"
version: 1
channels:
  "":
    ANY:
      allow: ["ALL"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.admin_code().as_str(), "BAD_CONFIG");
}

#[test]
fn empty_principal_rejected() {
    let bad = r#"
version: 1
channels:
  default:
    ANY:
      allow: [""]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.admin_code().as_str(), "BAD_CONFIG");
}

#[test]
fn builtin_document_round_trips_through_store() {
    let cfg = GuardConfig::builtin();
    let store = PolicyStore::from_config(cfg.clone());
    assert_eq!(store.to_config().unwrap(), cfg);
}

#[test]
fn yaml_round_trip_preserves_document() {
    let doc = r#"
version: 1
enabled: false
exceptions: ["health_ping"]
channels:
  whatsapp:
    send_message:
      allow: ["user123"]
      deny: ["user456"]
    ANY:
      allow: ["ALL"]
"#;
    let cfg = config::load_from_str(doc).unwrap();
    let rendered = config::to_yaml(&cfg).unwrap();
    let reparsed = config::load_from_str(&rendered).unwrap();
    assert_eq!(reparsed, cfg);
}
