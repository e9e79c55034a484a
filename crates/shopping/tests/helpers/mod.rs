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

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    mealplanner_db::migrate(&pool).await?;
    let store = SqliteStore::new(pool);

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

/// Fills each slot with `pick(day_index, category)`.
pub async fn plan_week(
    state: &mut TestState,
    pick: impl Fn(usize, mealplanner_shared::Category) -> String,
) -> anyhow::Result<()> {
    state.planner.start().await?;

    let mut day = 0;
    while let Some((_, category)) = state.planner.current_slot() {
        let name = pick(day, category);
        match state.planner.select(&state.catalog, &name).await? {
            Selection::Retry => anyhow::bail!("{name} is not a {category}"),
            Selection::Assigned(slot) | Selection::Completed(slot) => {
                if slot.category == Category::Dinner {
                    day += 1;
                }
            }
        }
    }

    Ok(())
}
