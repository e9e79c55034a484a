mod add;
mod id;

pub use add::AddMealInput;
pub use id::IdAllocator;

use std::collections::{BTreeMap, HashMap};

use mealplanner_shared::{Category, Meal, Result, Store};

/// In-memory index of every meal, loaded once at startup. The store stays the
/// source of truth: mutations are written there before they land here.
pub struct Catalog<S: Store> {
    store: S,
    meals: BTreeMap<i64, Meal>,
    by_category: HashMap<Category, Vec<i64>>,
    ids: IdAllocator,
}

impl<S: Store> Catalog<S> {
    pub async fn load(store: S) -> Result<Self> {
        let meals = store.load_all_meals().await?;
        let last_ingredient_id = store.last_ingredient_id().await?;
        let last_meal_id = meals.iter().map(|meal| meal.id).max();

        let mut catalog = Self {
            store,
            meals: BTreeMap::new(),
            by_category: HashMap::new(),
            ids: IdAllocator::seeded(last_meal_id, last_ingredient_id),
        };

        for meal in meals {
            catalog.index(meal);
        }

        tracing::info!(meals = catalog.len(), "Catalog loaded");

        Ok(catalog)
    }

    /// Meals of `category` ordered by name, then by id.
    pub fn list_by_category(&self, category: Category) -> Vec<&Meal> {
        self.by_category
            .get(&category)
            .map(|ids| ids.iter().filter_map(|id| self.meals.get(id)).collect())
            .unwrap_or_default()
    }

    /// Exact, case-sensitive name match. With duplicates the oldest meal wins.
    pub fn find_by_category_and_name(&self, category: Category, name: &str) -> Option<&Meal> {
        self.list_by_category(category)
            .into_iter()
            .find(|meal| meal.name == name)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Meal> {
        self.meals.get(&id)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn index(&mut self, meal: Meal) {
        let ids = self.by_category.entry(meal.category).or_default();
        let position = ids
            .binary_search_by(|id| {
                let other = &self.meals[id];
                (other.name.as_str(), other.id).cmp(&(meal.name.as_str(), meal.id))
            })
            .unwrap_or_else(|position| position);

        ids.insert(position, meal.id);
        self.meals.insert(meal.id, meal);
    }
}
