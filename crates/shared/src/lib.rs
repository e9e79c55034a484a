mod error;
pub mod meal;
pub mod mealplan;
pub mod shopping;
mod store;
mod validate;

pub use error::*;
pub use meal::{Category, Meal};
pub use mealplan::{Day, PlanSlot};
pub use shopping::ShoppingListEntry;
pub use store::*;
pub use validate::*;

#[doc(hidden)]
pub mod __private {
    pub use anyhow::anyhow;
}
