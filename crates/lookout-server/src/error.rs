//! HTTP error types for `LookOutline` server.
//!
//! Maps domain errors from `lookout-core` into HTTP responses. Every error
//! produces the same JSON envelope the website form reads:
//! `{ "success": false, "message": "..." }`. Delivery failures are logged
//! here with their cause and rendered with a generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use lookout_core::error::{IntakeError, LeadError, MailError};

/// Message returned for any delivery failure.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send lead. Please try again later.";

/// Message returned for a disallowed `Origin`.
pub const ORIGIN_REJECTED_MESSAGE: &str = "Origin not allowed";

/// Message returned when the request body is not JSON.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Client sent invalid input; the message is shown verbatim.
    BadRequest(String),
    /// The request's `Origin` is not on the allow-list.
    OriginRejected(String),
    /// The lead was valid but could not be delivered.
    Delivery(MailError),
}

/// JSON response envelope shared by success and error replies.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::OriginRejected(origin) => {
                tracing::warn!(%origin, "rejected request from disallowed origin");
                (StatusCode::FORBIDDEN, ORIGIN_REJECTED_MESSAGE.to_owned())
            }
            Self::Delivery(err) => {
                tracing::error!(error = %err, "lead delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DELIVERY_FAILED_MESSAGE.to_owned(),
                )
            }
        };

        (status, axum::Json(ApiResponse::failed(message))).into_response()
    }
}

impl From<LeadError> for AppError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::MissingRequired { .. } => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Validation(inner) => inner.into(),
            IntakeError::Delivery(inner) => Self::Delivery(inner),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!(error = %err, "rejected request body");
        Self::BadRequest(INVALID_BODY_MESSAGE.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn validation_error_keeps_message() {
        let err: AppError = LeadError::MissingRequired {
            fields: vec!["name"],
        }
        .into();
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Name and phone are required");
    }

    #[tokio::test]
    async fn delivery_error_hides_cause() {
        let err: AppError =
            IntakeError::Delivery(MailError::Smtp("535 bad credentials".to_owned())).into();
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], DELIVERY_FAILED_MESSAGE);
        assert!(!json.to_string().contains("535"));
    }

    #[tokio::test]
    async fn origin_rejection_is_forbidden() {
        let (status, json) = render(AppError::OriginRejected("https://evil.test".to_owned())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], ORIGIN_REJECTED_MESSAGE);
    }
}
