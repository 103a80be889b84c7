//! Cross-origin policy for `/api/*`.
//!
//! Browser requests must carry an `Origin` on the allow-list; requests with
//! no `Origin` (curl, server-to-server) pass through. Disallowed origins get
//! an explicit `403` JSON body from [`origin_guard`] before any handler runs,
//! including preflight `OPTIONS`. Allowed origins then receive the usual CORS
//! headers from [`cors_layer`].

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that rejects requests whose `Origin` is not allowed.
pub async fn origin_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(origin) = req.headers().get(header::ORIGIN) else {
        return next.run(req).await;
    };

    match origin.to_str() {
        Ok(origin) if state.origin_allowed(origin) => next.run(req).await,
        Ok(origin) => AppError::OriginRejected(origin.to_owned()).into_response(),
        Err(_) => AppError::OriginRejected("<non-ascii origin>".to_owned()).into_response(),
    }
}

/// CORS headers for allowed origins.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
