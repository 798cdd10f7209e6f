use sea_orm_migration::prelude::*;

use super::m20240312_000002_create_orders_table::Orders;

const INDEX_NAME: &str = "idx_orders_car_id_dropoff_date";

/// Index backing the car availability lookup (`car_id = ? AND dropoff_date >= ?`).
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Orders::Table)
                    .col(Orders::CarId)
                    .col(Orders::DropoffDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Orders::Table).to_owned())
            .await
    }
}
