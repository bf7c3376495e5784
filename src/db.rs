use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Single-shot pool: one connection is enough for the seed run.
pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
        .context("connect to database")?;
    Ok(pool)
}
