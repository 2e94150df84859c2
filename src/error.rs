//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout Scriptura.
//! All errors are structured and map to stable error codes.
//!
//! # Error Categories
//! - `EmptyReference`: input reference string is blank
//! - `InvalidFormat`: reference cannot be parsed into book + chapter/verse
//! - `BookNotFound`: book token absent from the book index
//! - `TranslationNotFound`: translation abbreviation absent from the directory
//! - `InvalidTableName`: resolved table identifier fails the safety check
//! - `ConnectionFailed`: database unreachable or handshake failure
//! - `QueryFailed`: query execution failure
//! - `InvalidConfig`: configuration file or environment malformed

use thiserror::Error;

/// Main error type for Scriptura operations
#[derive(Error, Debug)]
pub enum ScripturaError {
    /// Input reference string is empty or blank
    #[error("Reference cannot be empty")]
    EmptyReference,

    /// Reference cannot be split into book and chapter/verse portions
    #[error("Invalid reference format: {0}")]
    InvalidFormat(String),

    /// Book token not present in the book index
    #[error("Book '{0}' not found")]
    BookNotFound(String),

    /// Translation abbreviation not present in the translation directory
    #[error("Translation '{0}' not found")]
    TranslationNotFound(String),

    /// Resolved table identifier failed identifier-safety validation
    #[error("Invalid translation table name: {0}")]
    InvalidTableName(String),

    /// Database connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// Configuration error (unreadable file, invalid JSON, bad level name)
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl ScripturaError {
    /// Convert error to a stable error code string
    ///
    /// Error codes are stable and suitable for programmatic handling.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyReference => "EMPTY_REFERENCE",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::BookNotFound(_) => "BOOK_NOT_FOUND",
            Self::TranslationNotFound(_) => "TRANSLATION_NOT_FOUND",
            Self::InvalidTableName(_) => "INVALID_TABLE_NAME",
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
            Self::QueryFailed(_) => "QUERY_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }

    /// Get human-readable error message (no credentials or connection secrets)
    #[must_use]
    pub fn message(&self) -> String {
        // Use Display implementation from thiserror
        self.to_string()
    }

    /// Create an invalid format error
    pub fn invalid_format(reference: impl Into<String>) -> Self {
        Self::InvalidFormat(reference.into())
    }

    /// Create a book not found error
    pub fn book_not_found(book: impl Into<String>) -> Self {
        Self::BookNotFound(book.into())
    }

    /// Create a translation not found error
    pub fn translation_not_found(translation: impl Into<String>) -> Self {
        Self::TranslationNotFound(translation.into())
    }

    /// Create an invalid table name error
    pub fn invalid_table_name(table: impl Into<String>) -> Self {
        Self::InvalidTableName(table.into())
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed(message.into())
    }

    /// Create a query failed error
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }

    /// Create a configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias for Scriptura operations
pub type Result<T> = std::result::Result<T, ScripturaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ScripturaError::EmptyReference.error_code(), "EMPTY_REFERENCE");
        assert_eq!(ScripturaError::invalid_format("test").error_code(), "INVALID_FORMAT");
        assert_eq!(ScripturaError::book_not_found("test").error_code(), "BOOK_NOT_FOUND");
        assert_eq!(
            ScripturaError::translation_not_found("test").error_code(),
            "TRANSLATION_NOT_FOUND"
        );
        assert_eq!(ScripturaError::invalid_table_name("test").error_code(), "INVALID_TABLE_NAME");
        assert_eq!(ScripturaError::connection_failed("test").error_code(), "CONNECTION_FAILED");
        assert_eq!(ScripturaError::query_failed("test").error_code(), "QUERY_FAILED");
        assert_eq!(ScripturaError::invalid_config("test").error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_error_messages() {
        let err = ScripturaError::book_not_found("Jhn");
        assert!(err.message().contains("Jhn"));

        let err = ScripturaError::translation_not_found("XYZ");
        assert!(err.message().contains("XYZ"));

        let err = ScripturaError::query_failed("connection reset");
        assert!(err.message().contains("connection reset"));
    }

    #[test]
    fn test_error_constructors() {
        let err = ScripturaError::invalid_format("NotAReference");
        assert!(matches!(err, ScripturaError::InvalidFormat(_)));

        let err = ScripturaError::invalid_table_name("t-kjv");
        assert!(matches!(err, ScripturaError::InvalidTableName(_)));

        let err = ScripturaError::connection_failed("test");
        assert!(matches!(err, ScripturaError::ConnectionFailed(_)));

        let err = ScripturaError::invalid_config("test");
        assert!(matches!(err, ScripturaError::InvalidConfig(_)));
    }
}
