use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Meal {
    Table,
    MealId,
    Category,
    Meal,
}

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    IngredientId,
    Ingredient,
    MealId,
}

#[derive(Iden, Clone)]
pub enum Plan {
    Table,
    PlanId,
    Day,
    Category,
    MealId,
}
