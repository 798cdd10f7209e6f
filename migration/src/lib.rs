pub use sea_orm_migration::prelude::*;

mod m20240312_000001_create_cars_table;
mod m20240312_000002_create_orders_table;
mod m20240320_000003_create_orders_car_dropoff_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240312_000001_create_cars_table::Migration),
            Box::new(m20240312_000002_create_orders_table::Migration),
            Box::new(m20240320_000003_create_orders_car_dropoff_index::Migration),
        ]
    }
}
