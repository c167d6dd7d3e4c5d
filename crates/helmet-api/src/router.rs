//! Route definitions for the helmet registry HTTP API.
//!
//! All routes are mounted under `/v1`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.server.cors);

    let v1_routes = Router::new()
        .merge(health_routes())
        .merge(helmet_routes())
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed);

    Router::new()
        .nest("/v1", v1_routes)
        .fallback(handlers::fallback::not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/healthcheck", get(handlers::health::healthcheck))
}

/// Helmet CRUD and listing
fn helmet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/mhelmets",
            get(handlers::helmet::list_helmets).post(handlers::helmet::create_helmet),
        )
        .route(
            "/mhelmets/{id}",
            get(handlers::helmet::show_helmet)
                .put(handlers::helmet::replace_helmet)
                .patch(handlers::helmet::patch_helmet)
                .delete(handlers::helmet::delete_helmet),
        )
}
