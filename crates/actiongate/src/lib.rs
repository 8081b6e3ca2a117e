//! Top-level facade crate for actiongate.
//!
//! Re-exports core types and the engine library so users can depend on a single crate.

pub mod core {
    pub use actiongate_core::*;
}

pub mod engine {
    pub use actiongate_engine::*;
}
