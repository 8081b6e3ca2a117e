//! actiongate engine library entry.
//!
//! This crate wires the rule store, verdict evaluator, admin facade, agent
//! registry, and persisted-document handling into a cohesive access-control
//! stack. It is intended to be consumed by agent dispatchers, by the admin
//! binary (`gatectl`), and by integration tests.

pub mod admin;
pub mod config;
pub mod engine;
pub mod registry;
pub mod store;

pub use admin::AdminInterface;
pub use engine::PolicyEngine;
pub use registry::GuardRegistry;
pub use store::PolicyStore;
