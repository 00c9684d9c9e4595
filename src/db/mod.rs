// backend/src/db/mod.rs

use anyhow::Context;
use sqlx::{Pool, Postgres};

use crate::config::Config;

pub async fn connect(config: &Config) -> anyhow::Result<Pool<Postgres>> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connecting to PostgreSQL")?;

    tracing::info!(max_connections = config.max_connections, "connected to PostgreSQL");
    Ok(pool)
}

pub async fn migrate(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("running migrations")?;
    tracing::info!("migrations applied");
    Ok(())
}
