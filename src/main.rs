// backend/src/main.rs

use sqlx::{Pool, Postgres};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod models;
mod pages;
mod routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub season: config::Season,
    pub site_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("burpees_api=info,tower_http=info")),
        )
        .init();

    let config = config::Config::from_env()?;

    // Initialize DB pool
    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;

    tracing::info!(
        target_year = config.season.target_year,
        target_month = config.season.target_month,
        closed = config.season.is_year_closed,
        "season loaded"
    );

    let state = AppState {
        pool,
        season: config.season.clone(),
        site_name: config.site_name.clone(),
    };
    let app = routes::router(state, &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, static_dir = %config.static_dir, "API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
