use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::CarId))
                    .col(string(Cars::CarName))
                    .col(double(Cars::DayRate).default(0.0))
                    .col(double(Cars::MonthRate).default(0.0))
                    .col(string_null(Cars::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cars {
    Table,
    CarId,
    CarName,
    DayRate,
    MonthRate,
    Image,
}
