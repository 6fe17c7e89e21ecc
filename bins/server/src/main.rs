//! Spendbook API Server
//!
//! Main entry point for the expense record service.

use std::sync::Arc;

use anyhow::Context;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendbook_api::{AppState, create_router};
use spendbook_core::expense::InMemoryExpenseStore;
use spendbook_db::{ExpenseRepository, connect, migration::Migrator};
use spendbook_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let state = if config.database.in_memory {
        warn!("Using in-memory expense store; records are lost on exit");
        AppState::new(Arc::new(InMemoryExpenseStore::new()))
    } else {
        // One pool for the lifetime of the process
        let db = connect(&config.database)
            .await
            .context("failed to connect to database")?;
        info!("Connected to database");

        if config.database.run_migrations {
            Migrator::up(&db, None)
                .await
                .context("failed to apply migrations")?;
            info!("Migrations applied");
        }

        AppState::new(Arc::new(ExpenseRepository::new(db)))
    };

    let app = create_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
