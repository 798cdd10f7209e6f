use sea_orm_migration::{prelude::*, schema::*};

use super::m20240312_000001_create_cars_table::Cars;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::OrderId))
                    .col(integer(Orders::CarId))
                    .col(date(Orders::OrderDate))
                    .col(date(Orders::PickupDate))
                    .col(date(Orders::DropoffDate))
                    .col(string_null(Orders::PickupLocation))
                    .col(string_null(Orders::DropoffLocation))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_car_id")
                            .from(Orders::Table, Orders::CarId)
                            .to(Cars::Table, Cars::CarId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    OrderId,
    CarId,
    OrderDate,
    PickupDate,
    DropoffDate,
    PickupLocation,
    DropoffLocation,
}
