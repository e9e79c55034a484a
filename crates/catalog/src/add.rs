use mealplanner_shared::{Category, Meal, Store, is_letters_only};
use validator::{Validate, ValidationError};

#[derive(Validate, Clone, Debug)]
pub struct AddMealInput {
    pub category: Category,
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "At least 1 ingredient is required"),
        custom(function = "validate_ingredients")
    )]
    pub ingredients: Vec<String>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if is_letters_only(name) {
        return Ok(());
    }

    let mut error = ValidationError::new("letters_only");
    error.message = Some("Meal name must contain letters and spaces only".into());
    Err(error)
}

fn validate_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    if ingredients
        .iter()
        .all(|ingredient| is_letters_only(ingredient) && ingredient.trim() == ingredient)
    {
        return Ok(());
    }

    let mut error = ValidationError::new("letters_only");
    error.message = Some("Ingredients must contain letters and spaces only".into());
    Err(error)
}

impl<S: Store> super::Catalog<S> {
    /// Validates, persists and indexes a new meal. Nothing changes in memory
    /// when the store rejects the write.
    pub async fn add_meal(&mut self, input: AddMealInput) -> mealplanner_shared::Result<Meal> {
        input.validate()?;

        let (meal_id, first_ingredient_id) = self.ids.peek();
        let meal = Meal {
            id: meal_id,
            category: input.category,
            name: input.name,
            ingredients: input.ingredients,
        };

        self.store.persist_meal(&meal, first_ingredient_id).await?;
        self.ids.advance(meal.ingredients.len());
        self.index(meal.clone());

        tracing::info!(
            meal_id = meal.id,
            category = %meal.category,
            ingredients = meal.ingredients.len(),
            "Meal added"
        );

        Ok(meal)
    }
}
