use std::path::{Path, PathBuf};

use anyhow::Result;
use mealplanner_db::SqliteStore;

use crate::Config;

/// Opens the database and brings the schema up to date. Failing here is
/// fatal for the process.
pub async fn connect(config: &Config) -> Result<SqliteStore> {
    let pool =
        mealplanner_db::create_pool(&config.database.url, config.database.max_connections).await?;
    mealplanner_db::migrate(&pool).await?;

    Ok(SqliteStore::new(pool))
}

/// Drops the database file and recreates the schema.
pub async fn reset(config: &Config) -> Result<()> {
    if let Some(path) = database_path(&config.database.url) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = path.clone().into_os_string();
            file.push(suffix);
            let file = PathBuf::from(file);

            if Path::new(&file).exists() {
                std::fs::remove_file(&file)?;
                tracing::info!("Dropped database file: {}", file.display());
            }
        }
    }

    let store = connect(config).await?;
    store.pool().close().await;

    Ok(())
}

/// File behind a `sqlite:` url. `None` for in-memory databases.
pub fn database_path(url: &str) -> Option<PathBuf> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return None;
    }

    Some(PathBuf::from(path))
}
