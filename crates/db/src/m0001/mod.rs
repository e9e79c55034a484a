mod ingredient;
mod meal;
mod plan;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealplanner",
    "m0001",
    vec_box![],
    vec_box![
        meal::CreateTable,
        ingredient::CreateTable,
        ingredient::CreateIdx1,
        plan::CreateTable,
        plan::CreateUk1
    ]
);
