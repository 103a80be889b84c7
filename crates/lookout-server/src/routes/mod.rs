//! HTTP route modules and router assembly.

pub mod chat;
pub mod health;
pub mod leads;
pub mod ui;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::middleware as axum_mw;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, origin_guard};
use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Outermost first: cache header, then origin check, then CORS.
    let api_layers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum_mw::from_fn_with_state(Arc::clone(&state), origin_guard))
        .layer(cors_layer(&state.allowed_origins));

    let api_routes = Router::new()
        .merge(leads::router())
        .merge(chat::router())
        .merge(health::router())
        .layer(api_layers);

    Router::new()
        .merge(api_routes)
        .merge(ui::router())
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}
