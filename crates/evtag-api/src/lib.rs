//! Evtag API crate - axum HTTP server and route handlers.
//!
//! Exposes event CRUD, classify-only tag prediction and a health check
//! over JSON.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
