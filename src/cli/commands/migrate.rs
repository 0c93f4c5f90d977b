use anyhow::Context;

use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    db.migrate().await.context("failed to apply migrations")?;
    db.close().await;
    Ok(())
}
