//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let data_routes = Router::new()
        .route("/build-info", get(handlers::build_info))
        .route("/info", get(handlers::system_info))
        .route("/message", post(handlers::data_message))
        .route("/echo/:message", get(handlers::echo))
        .route("/generics", post(handlers::generics))
        .route("/test", any(handlers::request_parameters))
        .route("/very-long-number", get(handlers::very_long_number));

    let mut router = Router::new()
        .nest("/data", data_routes)
        .route("/user", get(handlers::user_page))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
