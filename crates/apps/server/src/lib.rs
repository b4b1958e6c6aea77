//! HTTP surface for the zoning map: zone lookups, view-state decoding,
//! shareable-link canonicalization and parcel geometry summaries.

pub mod config;
pub mod geometry;
pub mod routes;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

pub fn app(config: ServerConfig) -> Router {
    let cors_any = config.cors_any;
    let state = AppState {
        config: Arc::new(config),
    };

    let router = Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/api/zoning", get(routes::list_zones))
        .route("/api/zoning/:code", get(routes::get_zone))
        .route("/api/view", get(routes::decode_view))
        .route("/api/share", get(routes::share_url))
        .route("/api/geometry/summary", post(geometry::summarize));

    let router = if cors_any {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        )
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
