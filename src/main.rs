mod config;
mod db;
mod provision;
mod users;

use tracing::{error, info};

use crate::config::SeedConfig;
use crate::provision::provision_admin;
use crate::users::repo::PgUserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "seed_admin=info,lifedash_seed=info,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = SeedConfig::from_env()?;
    let pool = db::connect(&config.database_url).await?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        pool.close().await;
        error!(error = %e, "migrations failed");
        return Err(e.into());
    }

    let store = PgUserStore::new(pool.clone());
    let result = provision_admin(&store, &config.admin).await;

    // The pool is scoped to this run; release it whatever happened.
    pool.close().await;

    match result {
        Ok(outcome) => {
            info!(email = %config.admin.email, %outcome, "admin account provisioned");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "admin provisioning failed");
            Err(e.into())
        }
    }
}
