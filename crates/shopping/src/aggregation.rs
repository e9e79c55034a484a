use std::collections::HashMap;

use mealplanner_catalog::Catalog;
use mealplanner_mealplan::{Plan, Planner};
use mealplanner_shared::{Error, Result, ShoppingListEntry, Store, bail};

/// Ingredient totals for the planner's complete plan. Fails with
/// [`Error::NoPlan`] while no plan is complete.
pub fn aggregate<S: Store, C: Store>(
    planner: &Planner<S>,
    catalog: &Catalog<C>,
) -> Result<Vec<ShoppingListEntry>> {
    let Some(plan) = planner.plan() else {
        return Err(Error::NoPlan);
    };

    aggregate_plan(plan, catalog)
}

/// Counts every ingredient line of every planned meal, keyed by the exact
/// ingredient text. Entries come out in first-seen order: slot order, then
/// the meal's own ingredient order.
pub fn aggregate_plan<C: Store>(plan: &Plan, catalog: &Catalog<C>) -> Result<Vec<ShoppingListEntry>> {
    let mut entries: Vec<ShoppingListEntry> = vec![];
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for slot in plan.slots() {
        let Some(meal) = catalog.find_by_id(slot.meal_id) else {
            bail!(
                "Meal {} planned for {} {} is missing from the catalog",
                slot.meal_id,
                slot.day,
                slot.category
            );
        };

        for ingredient in &meal.ingredients {
            match positions.get(ingredient.as_str()) {
                Some(position) => entries[*position].count += 1,
                None => {
                    positions.insert(ingredient.as_str(), entries.len());
                    entries.push(ShoppingListEntry {
                        ingredient: ingredient.to_owned(),
                        count: 1,
                    });
                }
            }
        }
    }

    tracing::debug!(entries = entries.len(), "Aggregated shopping list");

    Ok(entries)
}
