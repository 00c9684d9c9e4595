use axum::{
    http::StatusCode,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

pub mod burpees;
pub mod health;
pub mod hims;
pub mod pages;
pub mod stats;

// Common error mappers
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!(error = %e, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}

pub fn bad_request<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

pub fn not_found<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, e.to_string())
}

/// Full application: JSON API, SPA page routes, then static assets.
pub fn router(state: AppState, static_dir: &str) -> Router {
    // Very permissive CORS, the SPA may be served from another origin in dev
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // health
        .route("/health", get(health::health))
        // stats
        .route("/api/stats/:year/:month/:day/global", get(stats::get_global_stats))
        .route("/api/stats/:year/:month/:day/regions", get(stats::get_top_region_stats))
        .route("/api/stats/:year/:month/:day/pax", get(stats::get_pax_stats))
        // hims
        .route("/api/hims", get(hims::list_hims).post(hims::create_him))
        .route("/api/hims/:him_id", get(hims::get_him))
        // burpees
        .route("/api/hims/:him_id/burpees", get(burpees::list_entries))
        .route("/api/hims/:him_id/burpees/:date", put(burpees::log_burpees))
        // pages
        .route("/", get(pages::home))
        .route("/signup", get(pages::signup_index))
        .route("/signup/:year", get(pages::signup))
        .route("/stats", get(pages::stats_index))
        .route("/stats/:year/:day", get(pages::stats))
        .route("/finish-strong", get(pages::finish_strong_index))
        .route("/finish-strong/:year", get(pages::finish_strong))
        // assets
        .fallback_service(ServeDir::new(static_dir))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod test_support;
