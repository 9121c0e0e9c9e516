//! Unified error types for the domain layer
//!
//! Validation messages are written for the editor: the form layer surfaces
//! them verbatim, so keep them short and free of internal detail.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a role binding resolved to an empty file)
    #[error("{0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// The message is displayed as-is, without a prefix, because it ends up
    /// in a user-facing notification.
    ///
    /// # Example
    /// ```ignore
    /// if gm.is_empty() {
    ///     return Err(DomainError::validation("GM & Player view must have a file"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
