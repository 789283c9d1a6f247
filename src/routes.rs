//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`    - Health check (public)
//! - `/listings/*`    - Listing CRUD; reads public, writes bearer-protected
//! - `/amenities/*`   - Read-only amenities (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket; stricter bucket on writes
//! - **Authentication** - Bearer token on write routes only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/listings/` and
/// `/listings` hit the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let public = api::routes::public_routes().layer(rate_limit::layer());

    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(public)
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
