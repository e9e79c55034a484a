mod aggregation;
mod export;

pub use aggregation::*;
pub use export::*;

use std::path::Path;

use mealplanner_catalog::Catalog;
use mealplanner_mealplan::Planner;
use mealplanner_shared::{Result, Store};

/// Aggregates the current plan and appends the rendered list to `path`.
/// Returns the number of lines written.
pub async fn save<S: Store, C: Store>(
    planner: &Planner<S>,
    catalog: &Catalog<C>,
    path: impl AsRef<Path>,
) -> Result<usize> {
    let lines = aggregate(planner, catalog)?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    append_lines(path, &lines).await?;

    Ok(lines.len())
}
