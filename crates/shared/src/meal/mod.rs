use strum::{AsRefStr, Display, EnumString, VariantArray};

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
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
}

impl Category {
    /// Canonical order used for menus and for the columns of a plan.
    pub const ALL: [Category; 3] = [Category::Breakfast, Category::Lunch, Category::Dinner];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meal {
    pub id: i64,
    pub category: Category,
    pub name: String,
    pub ingredients: Vec<String>,
}
