use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use mealplanner::{Config, Console};
use mealplanner_catalog::Catalog;
use mealplanner_mealplan::Planner;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan a week of meals and build the shopping list", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive planner (default)
    Run,
    /// Create or upgrade the database schema
    Migrate,
    /// Delete the database and recreate the schema
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow!(e))?;

    mealplanner::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config).await,
        Commands::Migrate => migrate(config).await,
        Commands::Reset => mealplanner::db::reset(&config).await,
    }
}

async fn run(config: Config) -> Result<()> {
    let store = mealplanner::db::connect(&config).await?;

    let catalog = Catalog::load(store.clone()).await?;
    let planner = Planner::load(store.clone()).await?;

    let mut console = Console::new(
        catalog,
        planner,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        &config.export.directory,
    );
    let result = console.run().await;

    store.pool().close().await;

    result
}

async fn migrate(config: Config) -> Result<()> {
    let store = mealplanner::db::connect(&config).await?;
    store.pool().close().await;

    tracing::info!("Database migrations completed");

    Ok(())
}
