// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Transport layer for the server: routes, CORS and request tracing.

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::AppState;
use crate::config::CorsConfig;
use crate::constants::FEEDBACK_PATH;
use crate::handlers::{create_feedback_http, list_feedback_http};

/// Build the CORS layer from configuration. `"*"` anywhere in the list opens
/// the API to every origin.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Ignoring invalid CORS origin `{origin}`: {err}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

pub fn app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    Router::new()
        .route(
            FEEDBACK_PATH,
            get(list_feedback_http).post(create_feedback_http),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
