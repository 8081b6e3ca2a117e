//! gatectl: admin tool for the access-control document.
//!
//! Loads the agent's document (path from `ACTIONGATE_CONFIG`, default
//! `actiongate.yaml`), applies one administrative command, prints the result,
//! and writes the document back after a mutation.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use actiongate_core::error::{GateError, Result};
use actiongate_core::model::AccessRequest;
use actiongate_engine::{config, AdminInterface, PolicyEngine, PolicyStore};

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", e.admin_code().as_str());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(cmd) = args.first() else {
        print_usage();
        return Ok(());
    };

    let path = env::var("ACTIONGATE_CONFIG").unwrap_or_else(|_| "actiongate.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let store = Arc::new(PolicyStore::from_config(cfg));
    let admin = AdminInterface::new(Arc::clone(&store));

    let mutated = match (cmd.as_str(), &args[1..]) {
        ("show", _) => {
            let dump = admin.dump()?;
            let rendered = serde_json::to_string_pretty(&dump)
                .map_err(|e| GateError::Internal(format!("render dump failed: {e}")))?;
            println!("{rendered}");
            false
        }
        ("check", [identity, resource, rest @ ..]) => {
            let engine = PolicyEngine::new(Arc::clone(&store));
            let mut req = AccessRequest::new(identity, resource);
            if let Some(channel) = rest.first() {
                req = req.on_channel(channel);
            }
            println!(
                "{}",
                if engine.evaluate(&req) {
                    "allowed"
                } else {
                    "denied"
                }
            );
            false
        }
        ("allow", [channel, resource, principal]) => {
            admin.set_allow(channel, resource, principal)?;
            true
        }
        ("unallow", [channel, resource, principal]) => {
            admin.clear_allow(channel, resource, principal)?;
            true
        }
        ("deny", [channel, resource, principal]) => {
            admin.set_deny(channel, resource, principal)?;
            true
        }
        ("undeny", [channel, resource, principal]) => {
            admin.clear_deny(channel, resource, principal)?;
            true
        }
        ("enable", _) => {
            admin.set_enabled(true)?;
            true
        }
        ("disable", _) => {
            admin.set_enabled(false)?;
            true
        }
        ("exempt", [resource]) => {
            admin.add_exemption(resource)?;
            true
        }
        ("unexempt", [resource]) => {
            admin.remove_exemption(resource)?;
            true
        }
        _ => {
            print_usage();
            false
        }
    };

    if mutated {
        config::save_to_file(&path, &store.to_config()?)?;
        tracing::info!(%path, "document written back");
    }
    Ok(())
}

fn print_usage() {
    eprintln!("usage: gatectl <command>");
    eprintln!("  show");
    eprintln!("  check <identity> <resource> [channel]");
    eprintln!("  allow|unallow|deny|undeny <channel> <resource> <principal>");
    eprintln!("  enable|disable");
    eprintln!("  exempt|unexempt <resource>");
    eprintln!("config path: $ACTIONGATE_CONFIG (default actiongate.yaml)");
}
