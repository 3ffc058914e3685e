//! Router assembly and shared application state.
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::handlers;
use crate::imagegen::ImageGenClient;
use crate::store::Store;

/// Shared by every request. The store handle is the only cross-request
/// state; the driver pools connections internally.
pub struct AppState {
    pub store: Store,
    /// `None` when the image API credential is not configured; generation
    /// requests then fail with a message naming the variable.
    pub image_client: Option<ImageGenClient>,
}

/// All routes of the service. The binary nests this under `/api`.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/status",
            post(handlers::create_status_check).get(handlers::get_status_checks),
        )
        .route("/generate-image", post(handlers::generate_image))
        .route("/generated-assets", get(handlers::get_generated_assets))
        .route("/brand-colors", get(handlers::brand_colors))
        .route("/brand-typography", get(handlers::brand_typography))
        .with_state(state)
}

/// CORS layer for the configured origin list. A `*` entry opens the API to
/// any origin; otherwise only the listed origins are allowed. All methods
/// and headers are permitted either way.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("ignoring invalid CORS origin '{}'", origin);
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}
