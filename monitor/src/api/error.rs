//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use urlmon_common::error::MonitorError;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub MonitorError);

impl From<MonitorError> for AppError {
    fn from(err: MonitorError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Use external_message() to avoid exposing internal details
        // (connection strings, file paths, etc.)
        let (status, message) = match &self.0 {
            MonitorError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.0.external_message()),
            MonitorError::Http(_) => (StatusCode::BAD_GATEWAY, self.0.external_message()),
            MonitorError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.external_message())
            }
            MonitorError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.external_message())
            }
            MonitorError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.external_message())
            }
        };

        let payload = json!({
            "error": message
        });

        (status, Json(payload)).into_response()
    }
}
