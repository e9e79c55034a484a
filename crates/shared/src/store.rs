use crate::{Meal, PlanSlot, Result, ShoppingListEntry};

/// Persistence collaborator. The catalog and the planner mirror every
/// mutation here before updating their in-memory state.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// All meals ordered by id, ingredients in entry order.
    async fn load_all_meals(&self) -> Result<Vec<Meal>>;

    async fn last_ingredient_id(&self) -> Result<Option<i64>>;

    /// Stores the meal and its ingredients, numbering ingredient rows from
    /// `first_ingredient_id`.
    async fn persist_meal(&self, meal: &Meal, first_ingredient_id: i64) -> Result<()>;

    /// Replaces the stored plan with `slots` in a single transaction.
    async fn persist_plan(&self, slots: &[PlanSlot]) -> Result<()>;

    async fn clear_plan(&self) -> Result<()>;

    /// Stored slots in plan order. Empty when no plan was saved.
    async fn load_plan(&self) -> Result<Vec<PlanSlot>>;

    /// Ingredient totals over the stored plan, ordered by first occurrence.
    async fn query_ingredient_totals_for_plan(&self) -> Result<Vec<ShoppingListEntry>>;
}
