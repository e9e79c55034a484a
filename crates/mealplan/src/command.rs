use mealplanner_catalog::Catalog;
use mealplanner_shared::{
    Category, Day, Error, Meal, PlanSlot, Result, Store, bail,
    mealplan::{SLOT_COUNT, slot_keys},
};

use crate::{Plan, Planner, State};

/// Outcome of offering a meal name for the current slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The name is not a meal of the slot's category. The slot stays open.
    Retry,
    /// The slot was filled and the session moved to the next one.
    Assigned(PlanSlot),
    /// The last slot was filled and the plan has been stored.
    Completed(PlanSlot),
}

impl<S: Store> Planner<S> {
    /// Opens a planning session. The previous plan is dropped here and in the
    /// store.
    pub async fn start(&mut self) -> Result<()> {
        self.store.clear_plan().await?;
        self.state = State::InProgress(Vec::with_capacity(SLOT_COUNT));

        tracing::info!("Planning session started");

        Ok(())
    }

    /// Abandons the running session. Nothing of it is kept.
    pub fn abort(&mut self) {
        if matches!(self.state, State::InProgress(_)) {
            tracing::info!("Planning session aborted");
            self.state = State::Empty;
        }
    }

    /// The (day, category) waiting for a meal.
    pub fn current_slot(&self) -> Option<(Day, Category)> {
        match &self.state {
            State::InProgress(assigned) => slot_keys().nth(assigned.len()),
            _ => None,
        }
    }

    /// Meals offered for the current slot, in catalog order. An empty
    /// category ends the session.
    pub fn choices<'a, C: Store>(&mut self, catalog: &'a Catalog<C>) -> Result<Vec<&'a Meal>> {
        let Some((_, category)) = self.current_slot() else {
            bail!("No planning session in progress");
        };

        let meals = catalog.list_by_category(category);
        if meals.is_empty() {
            self.abort();
            return Err(Error::EmptyCategory(category));
        }

        Ok(meals)
    }

    /// Assigns the meal named `candidate` to the current slot. Completing the
    /// week stores the whole plan; a failed write leaves the planner empty.
    /// An empty category ends the session, as in [`Planner::choices`].
    pub async fn select<C: Store>(
        &mut self,
        catalog: &Catalog<C>,
        candidate: &str,
    ) -> Result<Selection> {
        let Some((day, category)) = self.current_slot() else {
            bail!("No planning session in progress");
        };

        if catalog.list_by_category(category).is_empty() {
            self.abort();
            return Err(Error::EmptyCategory(category));
        }

        let Some(meal) = catalog.find_by_category_and_name(category, candidate) else {
            return Ok(Selection::Retry);
        };

        let slot = PlanSlot {
            day,
            category,
            meal_id: meal.id,
        };

        let State::InProgress(assigned) = &mut self.state else {
            bail!("No planning session in progress");
        };

        assigned.push(meal.id);
        if assigned.len() < SLOT_COUNT {
            return Ok(Selection::Assigned(slot));
        }

        let Some(plan) = Plan::from_meal_ids(assigned) else {
            bail!("Plan has {} slots, expected {SLOT_COUNT}", assigned.len());
        };

        let slots = plan.slots().collect::<Vec<_>>();
        if let Err(err) = self.store.persist_plan(&slots).await {
            tracing::error!(error = %err, "Failed to store plan");
            self.state = State::Empty;
            return Err(err);
        }

        self.state = State::Complete(plan);

        tracing::info!("Planning session completed");

        Ok(Selection::Completed(slot))
    }
}
