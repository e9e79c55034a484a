mod command;
mod plan;
mod query;

pub use command::Selection;
pub use plan::Plan;

use mealplanner_shared::{Result, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerState {
    Empty,
    InProgress,
    Complete,
}

enum State {
    Empty,
    /// Meal ids assigned so far, in slot order.
    InProgress(Vec<i64>),
    Complete(Plan),
}

/// Owns the single weekly plan and drives a planning session slot by slot.
pub struct Planner<S: Store> {
    store: S,
    state: State,
}

impl<S: Store> Planner<S> {
    /// Restores the stored plan when it is complete. Anything else starts
    /// out empty.
    pub async fn load(store: S) -> Result<Self> {
        let slots = store.load_plan().await?;
        let state = match Plan::from_slots(&slots) {
            Some(plan) => State::Complete(plan),
            None => {
                if !slots.is_empty() {
                    tracing::warn!(slots = slots.len(), "Ignoring incomplete stored plan");
                }

                State::Empty
            }
        };

        Ok(Self { store, state })
    }

    pub fn state(&self) -> PlannerState {
        match self.state {
            State::Empty => PlannerState::Empty,
            State::InProgress(_) => PlannerState::InProgress,
            State::Complete(_) => PlannerState::Complete,
        }
    }

    /// The finished plan, if any.
    pub fn plan(&self) -> Option<&Plan> {
        match &self.state {
            State::Complete(plan) => Some(plan),
            _ => None,
        }
    }
}
