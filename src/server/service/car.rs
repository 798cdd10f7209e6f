use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, list::ListQuery},
    error::AppError,
    model::{
        car::{Car, CreateCarParams, UpdateCarParams},
        list::{ListParams, Page},
    },
};

pub const CAR_NOT_FOUND: &str = "cars-not-found";

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of cars with paging metadata echoed back
    pub async fn get_paginated(&self, params: ListParams) -> Result<Page<Car>, AppError> {
        let repo = CarRepository::new(self.db);
        let list = ListQuery::from_request(&params)?;

        let (cars, total) = repo.get_paginated(&list).await?;

        Ok(Page {
            items: cars.into_iter().map(Car::from_entity).collect(),
            total,
            page: list.page,
            limit: list.limit,
            order: list.order,
            order_by: list.order_by_name().to_string(),
        })
    }

    /// Gets a car by id, failing with `cars-not-found` when absent
    pub async fn get_by_id(&self, car_id: i32) -> Result<Car, AppError> {
        let repo = CarRepository::new(self.db);

        repo.get_by_id(car_id)
            .await?
            .map(Car::from_entity)
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))
    }

    /// Creates a car and returns its assigned id
    pub async fn create(&self, params: CreateCarParams) -> Result<i32, AppError> {
        let repo = CarRepository::new(self.db);

        let car = repo.create(params).await?;

        tracing::info!("Created car {}", car.car_id);

        Ok(car.car_id)
    }

    /// Applies a sparse update; missing ids and empty updates succeed without writing
    pub async fn update(&self, car_id: i32, params: UpdateCarParams) -> Result<(), AppError> {
        let repo = CarRepository::new(self.db);

        let affected = repo.update(car_id, params).await?;

        tracing::debug!("Updated car {} ({} rows)", car_id, affected);

        Ok(())
    }

    /// Deletes a car; deleting a missing id is a no-op
    pub async fn delete(&self, car_id: i32) -> Result<(), AppError> {
        let repo = CarRepository::new(self.db);

        let affected = repo.delete(car_id).await?;

        tracing::debug!("Deleted car {} ({} rows)", car_id, affected);

        Ok(())
    }
}
