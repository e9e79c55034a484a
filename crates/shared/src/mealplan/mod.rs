use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::Category;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

/// Number of (day, category) cells in a week.
pub const SLOT_COUNT: usize = Day::ALL.len() * Category::ALL.len();

/// One filled cell of the weekly plan. `meal_id` references a catalog meal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanSlot {
    pub day: Day,
    pub category: Category,
    pub meal_id: i64,
}

/// Every (day, category) pair, day outer and category inner.
pub fn slot_keys() -> impl Iterator<Item = (Day, Category)> {
    Day::ALL
        .into_iter()
        .flat_map(|day| Category::ALL.into_iter().map(move |category| (day, category)))
}

/// Position of a (day, category) pair in [`slot_keys`] order.
pub fn slot_index(day: Day, category: Category) -> usize {
    let day = Day::ALL.iter().position(|d| *d == day).unwrap_or_default();
    let category = Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default();

    day * Category::ALL.len() + category
}
