//! Store-specific error types.

use std::path::PathBuf;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Task not found in the collection
    #[error("Task not found: {key}")]
    TaskNotFound { key: u64 },

    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to create data directory
    #[error("Failed to create data directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to save the data file
    #[error("Failed to save tasks to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the task collection
    #[error("Failed to serialize tasks: {0}")]
    SerializationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::TaskNotFound { key: 1651234567890 };
        assert!(error.to_string().contains("Task not found"));
        assert!(error.to_string().contains("1651234567890"));

        let error = StoreError::HomeDirectoryNotFound;
        assert!(error.to_string().contains("home directory"));

        let error = StoreError::SerializationFailed("test".to_string());
        assert!(error.to_string().contains("test"));
    }

    #[test]
    fn test_store_error_with_path() {
        let path = PathBuf::from("/test/tasks.json");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = StoreError::SaveFailed {
            path: path.clone(),
            source: io_error,
        };
        assert!(error.to_string().contains("/test/tasks.json"));
    }
}
