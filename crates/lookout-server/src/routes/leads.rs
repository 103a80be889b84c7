//! Lead intake route: `POST /api/leads`
//!
//! Accepts the website form as JSON and forwards it to the operator inbox.
//! Responses always use the `{ success, message }` envelope.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::routing::post;
use axum::{Json, Router};

use lookout_core::lead::LeadSubmission;

use crate::error::{ApiResponse, AppError};
use crate::state::AppState;

/// Confirmation message for a delivered lead.
pub const LEAD_SENT_MESSAGE: &str = "Lead sent successfully";

/// Build the lead intake router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/leads", post(create_lead))
}

/// Validate the submission and send one notification email.
///
/// - `200` `{ success: true }` once the relay accepts the message
/// - `400` when `name` or `phone` is missing, or the body is not JSON
/// - `500` with a generic message when delivery fails
///
/// An empty body, or one sent without a JSON content type, is read as `{}`
/// and so fails validation like any other submission without a name.
async fn create_lead(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    let submission = if body.is_empty() || !is_json(&headers) {
        LeadSubmission::default()
    } else {
        Json::<LeadSubmission>::from_bytes(&body)?.0
    };

    state.intake.submit(submission).await?;

    Ok(Json(ApiResponse::ok(LEAD_SENT_MESSAGE)))
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };
    kind.eq_ignore_ascii_case("application")
        && (subtype.eq_ignore_ascii_case("json")
            || subtype.to_ascii_lowercase().ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn with_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn json_content_types() {
        assert!(is_json(&with_type("application/json")));
        assert!(is_json(&with_type("Application/JSON; charset=utf-8")));
        assert!(is_json(&with_type("application/vnd.api+json")));
    }

    #[test]
    fn other_content_types() {
        assert!(!is_json(&HeaderMap::new()));
        assert!(!is_json(&with_type("text/plain")));
        assert!(!is_json(&with_type("application/x-www-form-urlencoded")));
        assert!(!is_json(&with_type("json")));
    }
}
