//! Top-level facade crate for osgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use osgate_core::*;
}

pub mod gateway {
    pub use osgate_gateway::*;
}
