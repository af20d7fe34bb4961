// src/domain/errors.rs
use thiserror::Error;

/// Raised when an integer does not name any registered [`ErrorCode`].
///
/// [`ErrorCode`]: crate::domain::error_code::ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub i32);
