//! Route configuration and setup.

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use gallery_core::{constants::UPLOADS_ROUTE, Config};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let uploads = ServeDir::new(state.storage.base_path());

    let app = Router::new()
        .route("/", get(handlers::info::server_info))
        .route("/health", get(handlers::info::liveness_check))
        .route("/upload", post(handlers::image_upload::upload_image))
        .route("/api/images", get(handlers::image_list::list_images))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(DefaultBodyLimit::max(config.max_body_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!(
        max_body_size_mb = config.max_body_size_bytes / 1024 / 1024,
        "Routes configured"
    );

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::HEAD,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ];
    let headers = [
        header::ORIGIN,
        header::CONTENT_TYPE,
        header::ACCEPT,
        header::AUTHORIZATION,
    ];

    let cors = if config.cors_allows_any() {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
    };
    Ok(cors)
}
