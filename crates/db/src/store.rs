use std::collections::HashMap;

use mealplanner_shared::{Category, Day, Meal, PlanSlot, Result, ShoppingListEntry, Store};
use sea_query::{Alias, Expr, ExprTrait, Func, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Text};

use crate::table;

/// Orders (slot, ingredient id) pairs in a single integer. Ingredient ids stay
/// below this value.
const SLOT_STRIDE: i64 = 1 << 32;

#[derive(FromRow)]
struct MealRow {
    meal_id: i64,
    category: Text<Category>,
    meal: String,
}

#[derive(FromRow)]
struct IngredientRow {
    ingredient: String,
    meal_id: i64,
}

#[derive(FromRow)]
struct PlanRow {
    day: Text<Day>,
    category: Text<Category>,
    meal_id: i64,
}

#[derive(FromRow)]
struct TotalRow {
    ingredient: String,
    total: i64,
}

/// [`Store`] backed by the `meal`, `ingredient` and `plan` tables.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl Store for SqliteStore {
    async fn load_all_meals(&self) -> Result<Vec<Meal>> {
        let statement = Query::select()
            .columns([table::Meal::MealId, table::Meal::Category, table::Meal::Meal])
            .from(table::Meal::Table)
            .order_by(table::Meal::MealId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let meals = sqlx::query_as_with::<_, MealRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        let statement = Query::select()
            .columns([table::Ingredient::Ingredient, table::Ingredient::MealId])
            .from(table::Ingredient::Table)
            .order_by(table::Ingredient::IngredientId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, IngredientRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        let mut ingredients: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            ingredients
                .entry(row.meal_id)
                .or_default()
                .push(row.ingredient);
        }

        let meals = meals
            .into_iter()
            .map(|row| Meal {
                id: row.meal_id,
                category: row.category.0,
                name: row.meal,
                ingredients: ingredients.remove(&row.meal_id).unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(meals = meals.len(), "Loaded meals");

        Ok(meals)
    }

    async fn last_ingredient_id(&self) -> Result<Option<i64>> {
        let statement = Query::select()
            .expr(Func::max(Expr::col(table::Ingredient::IngredientId)))
            .from(table::Ingredient::Table)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (id,) = sqlx::query_as_with::<_, (Option<i64>,), _>(&sql, values)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn persist_meal(&self, meal: &Meal, first_ingredient_id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let statement = Query::insert()
            .into_table(table::Meal::Table)
            .columns([table::Meal::MealId, table::Meal::Category, table::Meal::Meal])
            .values_panic([
                meal.id.into(),
                meal.category.to_string().into(),
                meal.name.to_owned().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !meal.ingredients.is_empty() {
            let mut statement = Query::insert()
                .into_table(table::Ingredient::Table)
                .columns([
                    table::Ingredient::IngredientId,
                    table::Ingredient::Ingredient,
                    table::Ingredient::MealId,
                ])
                .to_owned();

            for (ingredient_id, ingredient) in (first_ingredient_id..).zip(meal.ingredients.iter())
            {
                statement.values_panic([
                    ingredient_id.into(),
                    ingredient.to_owned().into(),
                    meal.id.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::debug!(meal_id = meal.id, first_ingredient_id, "Persisted meal");

        Ok(())
    }

    async fn persist_plan(&self, slots: &[PlanSlot]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let statement = Query::delete().from_table(table::Plan::Table).to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !slots.is_empty() {
            let mut statement = Query::insert()
                .into_table(table::Plan::Table)
                .columns([
                    table::Plan::PlanId,
                    table::Plan::Day,
                    table::Plan::Category,
                    table::Plan::MealId,
                ])
                .to_owned();

            for (plan_id, slot) in (0i64..).zip(slots.iter()) {
                statement.values_panic([
                    plan_id.into(),
                    slot.day.to_string().into(),
                    slot.category.to_string().into(),
                    slot.meal_id.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::debug!(slots = slots.len(), "Persisted plan");

        Ok(())
    }

    async fn clear_plan(&self) -> Result<()> {
        let statement = Query::delete().from_table(table::Plan::Table).to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!("Cleared plan");

        Ok(())
    }

    async fn load_plan(&self) -> Result<Vec<PlanSlot>> {
        let statement = Query::select()
            .columns([
                table::Plan::Day,
                table::Plan::Category,
                table::Plan::MealId,
            ])
            .from(table::Plan::Table)
            .order_by(table::Plan::PlanId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| PlanSlot {
                day: row.day.0,
                category: row.category.0,
                meal_id: row.meal_id,
            })
            .collect())
    }

    async fn query_ingredient_totals_for_plan(&self) -> Result<Vec<ShoppingListEntry>> {
        let statement = Query::select()
            .column((table::Ingredient::Table, table::Ingredient::Ingredient))
            .expr_as(
                Func::count(Expr::col((
                    table::Ingredient::Table,
                    table::Ingredient::IngredientId,
                ))),
                Alias::new("total"),
            )
            .from(table::Ingredient::Table)
            .inner_join(
                table::Plan::Table,
                Expr::col((table::Plan::Table, table::Plan::MealId))
                    .equals((table::Ingredient::Table, table::Ingredient::MealId)),
            )
            .group_by_col((table::Ingredient::Table, table::Ingredient::Ingredient))
            .order_by_expr(
                Func::min(
                    Expr::col((table::Plan::Table, table::Plan::PlanId))
                        .mul(SLOT_STRIDE)
                        .add(Expr::col((
                            table::Ingredient::Table,
                            table::Ingredient::IngredientId,
                        ))),
                )
                .into(),
                Order::Asc,
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, TotalRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                Ok(ShoppingListEntry {
                    ingredient: row.ingredient,
                    count: u32::try_from(row.total).map_err(anyhow::Error::from)?,
                })
            })
            .collect()
    }
}
