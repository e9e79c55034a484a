use std::{path::PathBuf, str::FromStr};

use mealplanner_catalog::{AddMealInput, Catalog};
use mealplanner_db::SqliteStore;
use mealplanner_shared::{Category, Meal};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    mealplanner_db::migrate(&pool).await?;

    Ok(SqliteStore::new(pool))
}

#[allow(dead_code)]
pub async fn add_meal(
    catalog: &mut Catalog<SqliteStore>,
    category: Category,
    name: &str,
    ingredients: &[&str],
) -> anyhow::Result<Meal> {
    Ok(catalog
        .add_meal(AddMealInput {
            category,
            name: name.to_owned(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        })
        .await?)
}
