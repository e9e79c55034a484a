use std::fmt;

/// Total occurrences of one ingredient across the meals of a complete plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingListEntry {
    pub ingredient: String,
    pub count: u32,
}

impl fmt::Display for ShoppingListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{} x{}", self.ingredient, self.count)
        } else {
            write!(f, "{}", self.ingredient)
        }
    }
}
