//! Message API server library entry.
//!
//! This crate wires config, shared state, and the HTTP handlers around the
//! components in `msgapi-core`. It is consumed by the binary (`main.rs`) and
//! by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
