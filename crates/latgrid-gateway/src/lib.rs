//! latgrid gateway library entry.
//!
//! This crate wires the config layer, dataset loading, shared state, and the
//! HTTP surface into a cohesive service. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dataset;
pub mod obs;
pub mod ops;
pub mod router;
