use thiserror::Error;

use crate::types::MessageId;

/// Failure taxonomy shared by every relay component.
///
/// User-facing paths never show these messages; they are for the operator log only.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Input that cannot be resolved to a correlation target (bad payload, missing reply target).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A correlation record with this admin copy id already exists.
    #[error("Conflict: admin_copy_id {0} already recorded")]
    Conflict(MessageId),

    /// The messaging transport failed or timed out.
    #[error("External call failed: {0}")]
    ExternalCall(String),

    #[error("Not found: admin_copy_id {0}")]
    NotFound(MessageId),

    /// Caller is not the operator.
    #[error("Unauthorized: user {0}")]
    Unauthorized(i64),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
