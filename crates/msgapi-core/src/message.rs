//! Message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix that namespaces message ids.
pub const ID_PREFIX: &str = "msg_";

/// A stored message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque id, `msg_` followed by 10 hex digits.
    pub id: String,
    /// Text exactly as submitted (not trimmed or lowercased).
    pub text: String,
    /// Creation time, RFC 3339 on the wire.
    pub created_at: DateTime<Utc>,
}
