use mealplanner_shared::{
    Category, Day, PlanSlot,
    mealplan::{SLOT_COUNT, slot_index, slot_keys},
};

/// A fully populated week: one meal id per (day, category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    meal_ids: [i64; SLOT_COUNT],
}

impl Plan {
    /// Builds a plan from slots given in day/category order. Returns `None`
    /// unless every slot is present exactly once.
    pub fn from_slots(slots: &[PlanSlot]) -> Option<Self> {
        if slots.len() != SLOT_COUNT {
            return None;
        }

        let mut meal_ids = [0; SLOT_COUNT];
        for ((day, category), slot) in slot_keys().zip(slots) {
            if slot.day != day || slot.category != category {
                return None;
            }

            meal_ids[slot_index(day, category)] = slot.meal_id;
        }

        Some(Self { meal_ids })
    }

    pub(crate) fn from_meal_ids(meal_ids: &[i64]) -> Option<Self> {
        Some(Self {
            meal_ids: meal_ids.try_into().ok()?,
        })
    }

    pub fn get(&self, day: Day, category: Category) -> i64 {
        self.meal_ids[slot_index(day, category)]
    }

    /// All 21 slots, Monday breakfast first.
    pub fn slots(&self) -> impl Iterator<Item = PlanSlot> + '_ {
        slot_keys()
            .zip(self.meal_ids.iter())
            .map(|((day, category), meal_id)| PlanSlot {
                day,
                category,
                meal_id: *meal_id,
            })
    }
}
