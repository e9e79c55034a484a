use std::path::Path;

use mealplanner::{
    Config, Console,
    config::{DatabaseConfig, ExportConfig, ObservabilityConfig},
};
use mealplanner_catalog::Catalog;
use mealplanner_db::SqliteStore;
use mealplanner_mealplan::{Planner, PlannerState};

pub fn setup_config(dir: &Path) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.join("mealplanner.db").to_str().unwrap()),
            max_connections: 1,
        },
        export: ExportConfig {
            directory: dir.to_str().unwrap().to_owned(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub struct Session {
    pub output: String,
    pub meals: usize,
    pub planner_state: PlannerState,
}

/// Feeds `script` to a fresh console over the configured database.
pub async fn run_script(config: &Config, script: &str) -> anyhow::Result<Session> {
    run_console(config, script, false).await
}

/// Like [`run_script`], with the database closed once the catalog is loaded.
#[allow(dead_code)]
pub async fn run_script_after_store_closed(config: &Config, script: &str) -> anyhow::Result<Session> {
    run_console(config, script, true).await
}

async fn run_console(config: &Config, script: &str, close_store: bool) -> anyhow::Result<Session> {
    let store: SqliteStore = mealplanner::db::connect(config).await?;
    let catalog = Catalog::load(store.clone()).await?;
    let planner = Planner::load(store.clone()).await?;

    if close_store {
        store.pool().close().await;
    }

    let mut console = Console::new(
        catalog,
        planner,
        script.as_bytes(),
        Vec::new(),
        &config.export.directory,
    );
    console.run().await?;

    let session = Session {
        output: String::from_utf8(console.output().clone())?,
        meals: console.catalog().len(),
        planner_state: console.planner().state(),
    };

    store.pool().close().await;

    Ok(session)
}

pub const THREE_MEALS: &str = "\
add
breakfast
oatmeal
oats, milk
add
lunch
soup
broth,salt
add
dinner
pasta
pasta, salt
";

/// Picks the same three meals for every day.
#[allow(dead_code)]
pub fn plan_script() -> String {
    let mut script = String::from("plan\n");
    for _ in 0..7 {
        script.push_str("oatmeal\nsoup\npasta\n");
    }
    script
}
