//! Access-control document loader (strict parsing) and write-back.

pub mod schema;

use std::fs;

use actiongate_core::error::{GateError, Result};

pub use schema::{GuardConfig, CONFIG_VERSION};

pub fn load_from_file(path: &str) -> Result<GuardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GateError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GuardConfig> {
    let cfg: GuardConfig = serde_yaml::from_str(s)
        .map_err(|e| GateError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Render the document for write-back after an administrative change.
pub fn to_yaml(cfg: &GuardConfig) -> Result<String> {
    serde_yaml::to_string(cfg)
        .map_err(|e| GateError::Internal(format!("serialize config failed: {e}")))
}

pub fn save_to_file(path: &str, cfg: &GuardConfig) -> Result<()> {
    let s = to_yaml(cfg)?;
    fs::write(path, s).map_err(|e| GateError::Internal(format!("write config failed: {e}")))
}
