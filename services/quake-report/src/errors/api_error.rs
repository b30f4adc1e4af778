use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub trace_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub trace_id: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            trace_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::new("FEED_NOT_CONFIGURED", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (trace_id: {})", self.code, self.message, self.trace_id)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: self.code,
                message: self.message,
                trace_id: self.trace_id,
            },
        };

        // Errors travel in the body; the status stays 200
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_error_gets_a_fresh_trace_id() {
        let a = ApiError::not_configured("no feed url");
        let b = ApiError::not_configured("no feed url");
        assert_eq!(a.code, "FEED_NOT_CONFIGURED");
        assert!(Uuid::parse_str(&a.trace_id).is_ok());
        assert_ne!(a.trace_id, b.trace_id);
    }

    #[test]
    fn display_includes_code_and_trace() {
        let err = ApiError::not_found("nothing loaded");
        let shown = err.to_string();
        assert!(shown.starts_with("[NOT_FOUND] nothing loaded (trace_id: "));
    }
}
