use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{Meal, Plan};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Plan::Table)
        .col(
            ColumnDef::new(Plan::PlanId)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Plan::Day).string().not_null().string_len(10))
        .col(
            ColumnDef::new(Plan::Category)
                .string()
                .not_null()
                .string_len(30),
        )
        .col(ColumnDef::new(Plan::MealId).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(Plan::Table, Plan::MealId)
                .to(Meal::Table, Meal::MealId),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Plan::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateUk1;

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_plan_day_category")
        .table(Plan::Table)
        .unique()
        .col(Plan::Day)
        .col(Plan::Category)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_plan_day_category")
        .table(Plan::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateUk1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_uk_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_uk_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
