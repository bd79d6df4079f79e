//! Error types for chatseed
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in chatseed
#[derive(Debug, Error)]
pub enum ChatseedError {
    /// Malformed placeholder syntax in a template or snippet
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    /// Template compiled but failed while rendering
    #[error("Render error: {0}")]
    Render(String),

    /// A record with the same unique field value already exists
    #[error("Uniqueness violation: {collection}.{field} = {value:?} already exists")]
    UniquenessViolation {
        collection: String,
        field: String,
        value: String,
    },

    /// Record not found in storage
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatseedError {
    /// Returns true if the caller can retry with different input (e.g. another name)
    pub fn is_conflict(&self) -> bool {
        matches!(self, ChatseedError::UniquenessViolation { .. })
    }
}

/// Result type alias for chatseed operations
pub type Result<T> = std::result::Result<T, ChatseedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_syntax_error() {
        let err = ChatseedError::TemplateSyntax("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "Template syntax error: unexpected end of input");
    }

    #[test]
    fn test_uniqueness_violation_error() {
        let err = ChatseedError::UniquenessViolation {
            collection: "snippets".to_string(),
            field: "name".to_string(),
            value: "greeting".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Uniqueness violation: snippets.name = \"greeting\" already exists"
        );
        assert!(err.is_conflict());
    }

    #[test]
    fn test_not_found_error() {
        let err = ChatseedError::NotFound("conv-1".to_string());
        assert_eq!(err.to_string(), "Not found: conv-1");
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_storage_error() {
        let err = ChatseedError::Storage("file locked".to_string());
        assert_eq!(err.to_string(), "Storage error: file locked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChatseedError = io_err.into();
        assert!(matches!(err, ChatseedError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatseedError = json_err.into();
        assert!(matches!(err, ChatseedError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ChatseedError::Render("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
