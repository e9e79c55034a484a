use mealplanner_catalog::Catalog;
use mealplanner_shared::{Category, Day, Store, mealplan::slot_index};

use crate::{Planner, State};

impl<S: Store> Planner<S> {
    /// Meal id held by a slot, while a session runs or once the plan is
    /// complete.
    pub fn get_slot(&self, day: Day, category: Category) -> Option<i64> {
        match &self.state {
            State::Empty => None,
            State::InProgress(assigned) => assigned.get(slot_index(day, category)).copied(),
            State::Complete(plan) => Some(plan.get(day, category)),
        }
    }

    /// The week as printed on the console: a blank line and the day, then one
    /// `category: name` line per slot.
    pub fn render_week<C: Store>(&self, catalog: &Catalog<C>) -> Vec<String> {
        let Some(plan) = self.plan() else {
            return vec![];
        };

        let mut lines = vec![];
        for day in Day::ALL {
            lines.push(String::new());
            lines.push(day.to_string());

            for category in Category::ALL {
                if let Some(meal) = catalog.find_by_id(plan.get(day, category)) {
                    lines.push(format!("{category}: {}", meal.name));
                }
            }
        }

        lines
    }
}
