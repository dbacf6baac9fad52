//! msgapi core: the message model, validation rules, in-memory store and
//! usage counters behind the Message API.
//!
//! This crate carries no transport or runtime dependencies. The HTTP layer in
//! `msgapi-server` composes these pieces; tests can build isolated instances
//! of every component.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Store and metrics operations report "not found" through `Option`/`bool`
//! and never fail; the error type below is for the layers built on top.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod message;
pub mod metrics;
pub mod store;
pub mod validation;

/// Shared error and result types.
pub use error::{ClientCode, MsgApiError, Result};
pub use message::Message;
pub use metrics::{MetricsCollector, MetricsSnapshot};
pub use store::MessageStore;
pub use validation::{is_duplicate, normalize, validate_message, ValidationFailure};
