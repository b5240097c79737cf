//! Error types for store construction and action wrapping

use thiserror::Error;

/// Errors raised when a caller violates a construction or wrapping contract
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An argument did not satisfy the contract of the call it was passed to.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StoreError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
