//! HTTP handlers for the `/messages` resource and its error mapping.

pub mod dto;
pub mod error;
pub mod messages;

pub use error::ApiError;
