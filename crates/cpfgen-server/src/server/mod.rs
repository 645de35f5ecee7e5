//! HTTP surface of the challenge site.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env configuration (`CliArgs`, `ServerConfig`).
//! - [`telemetry`] - `tracing` subscriber setup.
//! - [`state`] - `AppState`, the per-application value handed to handlers.
//! - [`params`] - first-value-wins query and form parameters.
//! - [`routes`] - request handlers.
//! - [`templates`] - HTML rendering.
//! - [`error`] - `AppError` and its HTTP mapping.

pub mod config;
pub mod error;
pub mod params;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod templates;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route(
            "/display",
            get(routes::display_query).post(routes::display_form),
        )
        .route("/genius", post(routes::genius))
        .route(
            "/notforget",
            get(routes::notforget_query).post(routes::notforget_form),
        )
        .route("/api/cpf", get(routes::api_cpf))
        .route("/api/scan", post(routes::api_scan))
        .route("/api/getcheck", post(routes::api_getcheck))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
