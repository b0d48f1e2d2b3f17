//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, request tracing, a body size
//! limit and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use evtag_core::config::ServerConfig;
use evtag_core::error::EvtagError;

use crate::handlers;
use crate::state::AppState;

/// Build the CORS layer from server settings.
///
/// `"*"` in the origin list allows any origin; otherwise only the listed
/// origins are allowed. Methods and headers are unrestricted either way.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = if server.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let list: Vec<HeaderValue> = server
            .cors_allow_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.server);
    let body_limit = state.server.max_body_bytes;

    Router::new()
        .route("/health", get(handlers::health))
        .route("/predict_tags", post(handlers::predict_tags))
        .route("/add_event", post(handlers::add_event))
        .route("/get_events", get(handlers::get_events))
        .route("/delete_event/{id}", delete(handlers::delete_event))
        .route("/edit_event/{id}", put(handlers::edit_event))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address.
pub async fn start_server(server: &ServerConfig, state: AppState) -> Result<(), EvtagError> {
    let addr = format!("{}:{}", server.host, server.port);

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EvtagError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "API server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| EvtagError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
