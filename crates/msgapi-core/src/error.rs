//! Shared error type across msgapi crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Message text rejected by the validation rules.
    ValidationError,
    /// Normalized text already stored.
    DuplicateMessage,
    /// No message under the requested id.
    MessageNotFound,
    /// Framework-level rejection (malformed body, unknown route, ...).
    HttpError,
    /// Configuration could not be loaded.
    InvalidConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ValidationError => "VALIDATION_ERROR",
            ClientCode::DuplicateMessage => "DUPLICATE_MESSAGE",
            ClientCode::MessageNotFound => "MESSAGE_NOT_FOUND",
            ClientCode::HttpError => "HTTP_ERROR",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MsgApiError>;

/// Unified error type used by the server and config loading.
#[derive(Debug, Error)]
pub enum MsgApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Message already exists")]
    DuplicateMessage,
    #[error("Message with ID '{0}' not found")]
    MessageNotFound(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MsgApiError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MsgApiError::Validation(_) => ClientCode::ValidationError,
            MsgApiError::DuplicateMessage => ClientCode::DuplicateMessage,
            MsgApiError::MessageNotFound(_) => ClientCode::MessageNotFound,
            MsgApiError::Http { .. } => ClientCode::HttpError,
            MsgApiError::UnsupportedVersion | MsgApiError::InvalidConfig(_) => {
                ClientCode::InvalidConfig
            }
            MsgApiError::Internal(_) => ClientCode::Internal,
        }
    }

    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            MsgApiError::Validation(_) => 400,
            MsgApiError::DuplicateMessage => 409,
            MsgApiError::MessageNotFound(_) => 404,
            MsgApiError::Http { status, .. } => *status,
            MsgApiError::UnsupportedVersion
            | MsgApiError::InvalidConfig(_)
            | MsgApiError::Internal(_) => 500,
        }
    }
}

impl From<crate::validation::ValidationFailure> for MsgApiError {
    fn from(f: crate::validation::ValidationFailure) -> Self {
        MsgApiError::Validation(f.reason().to_string())
    }
}
