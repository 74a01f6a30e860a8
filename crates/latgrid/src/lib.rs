//! Top-level facade crate for latgrid.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use latgrid_core::*;
}

pub mod gateway {
    pub use latgrid_gateway::*;
}
