//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// monitor error type
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Malformed client request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// Returns a safe error message for external clients.
    ///
    /// Internal details (file paths, connection strings, upstream host
    /// names) are logged separately and never included here.
    pub fn external_message(&self) -> String {
        match self {
            MonitorError::Database(_) => "A database error occurred".to_string(),
            MonitorError::Http(_) => "An upstream HTTP error occurred".to_string(),
            MonitorError::BadRequest(msg) => msg.clone(),
            MonitorError::Serialization(_) => "A serialization error occurred".to_string(),
            MonitorError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

/// monitor result type
pub type MonitorResult<T> = Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_message_hides_database_details() {
        let err = MonitorError::Database("sqlite:/home/user/.urlmon/urlmon.db is locked".into());
        assert_eq!(err.external_message(), "A database error occurred");
    }

    #[test]
    fn external_message_keeps_bad_request_text() {
        let err = MonitorError::BadRequest("urls must be an array of strings".into());
        assert_eq!(err.external_message(), "urls must be an array of strings");
    }
}
