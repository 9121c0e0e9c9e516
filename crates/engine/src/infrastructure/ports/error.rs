//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Errors from listing a storage location.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseError {
    #[error("Unknown file source: {0}")]
    UnknownSource(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Failed to list {path}: {message}")]
    ListFailed { path: String, message: String },
}

impl BrowseError {
    pub fn list_failed(path: impl Into<String>, message: impl ToString) -> Self {
        Self::ListFailed {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_error_messages_carry_context() {
        let err = RepoError::database("scene_flags", "disk I/O error");
        assert_eq!(err.to_string(), "Database error in scene_flags: disk I/O error");

        let err = RepoError::serialization("expected a string");
        assert_eq!(err.to_string(), "Serialization error: expected a string");
    }

    #[test]
    fn browse_error_names_the_path() {
        let err = BrowseError::list_failed("maps", "permission denied");
        assert_eq!(err.to_string(), "Failed to list maps: permission denied");
    }
}
