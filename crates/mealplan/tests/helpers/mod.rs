use std::{path::PathBuf, str::FromStr};

use mealplanner_catalog::{AddMealInput, Catalog};
use mealplanner_db::SqliteStore;
use mealplanner_mealplan::{Planner, Selection};
use mealplanner_shared::{Category, Meal};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub struct TestState {
    pub store: SqliteStore,
    pub catalog: Catalog<SqliteStore>,
    pub planner: Planner<SqliteStore>,
}

pub async fn setup_store(path: PathBuf) -> anyhow::Result<SqliteStore> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    mealplanner_db::migrate(&pool).await?;

    Ok(SqliteStore::new(pool))
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let store = setup_store(path).await?;

    Ok(TestState {
        catalog: Catalog::load(store.clone()).await?,
        planner: Planner::load(store.clone()).await?,
        store,
    })
}

pub async fn add_meal(
    state: &mut TestState,
    category: Category,
    name: &str,
    ingredients: &[&str],
) -> anyhow::Result<Meal> {
    Ok(state
        .catalog
        .add_meal(AddMealInput {
            category,
            name: name.to_owned(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        })
        .await?)
}

/// Fills every slot with the meal picked for its category.
#[allow(dead_code)]
pub async fn plan_week(
    state: &mut TestState,
    pick: impl Fn(Category) -> &'static str,
) -> anyhow::Result<()> {
    state.planner.start().await?;

    while let Some((_, category)) = state.planner.current_slot() {
        state.planner.choices(&state.catalog)?;
        match state.planner.select(&state.catalog, pick(category)).await? {
            Selection::Retry => anyhow::bail!("{} is not a {category}", pick(category)),
            Selection::Assigned(_) | Selection::Completed(_) => {}
        }
    }

    Ok(())
}
