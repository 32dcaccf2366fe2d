//! Route definitions for the AI Tutor HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::access_log;
use crate::middleware::timeout::request_deadline;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let body_limit = server.body_limit_bytes;
    let request_timeout = Duration::from_secs(server.request_timeout_seconds);
    let cors = build_cors_layer(&server.cors);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(credits_routes())
        .merge(teacher_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn_with_state(
            request_timeout,
            request_deadline,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(access_log))
        .with_state(state)
}

/// Auth endpoints: login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

fn credits_routes() -> Router<AppState> {
    Router::new().route("/credits", get(handlers::credits::get_credits))
}

fn teacher_routes() -> Router<AppState> {
    Router::new().route("/teachers/explore", get(handlers::teachers::explore))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
