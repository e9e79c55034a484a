/// Issues meal ids and ingredient row ids. Both counters only move forward,
/// so an id is never handed out twice, even across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next_meal_id: i64,
    next_ingredient_id: i64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_meal_id: 1,
            next_ingredient_id: 1,
        }
    }
}

impl IdAllocator {
    /// Continues after the highest ids already persisted.
    pub fn seeded(last_meal_id: Option<i64>, last_ingredient_id: Option<i64>) -> Self {
        let default = Self::default();

        Self {
            next_meal_id: last_meal_id.map_or(default.next_meal_id, |id| id + 1),
            next_ingredient_id: last_ingredient_id.map_or(default.next_ingredient_id, |id| id + 1),
        }
    }

    /// Ids the next meal would receive: its own id and the first ingredient id.
    pub fn peek(&self) -> (i64, i64) {
        (self.next_meal_id, self.next_ingredient_id)
    }

    pub fn advance(&mut self, ingredient_count: usize) {
        self.next_meal_id += 1;
        self.next_ingredient_id += ingredient_count as i64;
    }
}
