use anyhow::Context;

use crate::config::AppConfig;
use crate::database::{seed, DatabaseManager};

pub async fn migrate(config: AppConfig) -> anyhow::Result<()> {
    DatabaseManager::init(&config.database)
        .await
        .context("failed to connect to database")?;

    let result = DatabaseManager::migrate().await;
    DatabaseManager::close().await;
    result.context("migration failed")
}

pub async fn seed_database(config: AppConfig) -> anyhow::Result<()> {
    let pool = DatabaseManager::init(&config.database)
        .await
        .context("failed to connect to database")?;

    let result = seed::run(&pool).await;
    DatabaseManager::close().await;
    result.context("seeding failed")
}
