use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, list::ListQuery, order::OrderRepository},
    error::{validation::ValidationError, AppError},
    model::{
        list::{ListParams, Page},
        order::{CreateOrderParams, Order, UpdateOrderParams},
    },
};

pub const ORDER_NOT_FOUND: &str = "orders-not-found";
pub const REFERENCED_CAR_NOT_FOUND: &str = "car-not-found";

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of orders with the car name joined in
    pub async fn get_paginated(&self, params: ListParams) -> Result<Page<Order>, AppError> {
        let repo = OrderRepository::new(self.db);
        let list = ListQuery::from_request(&params)?;

        let (orders, total) = repo.get_paginated(&list).await?;

        Ok(Page {
            items: orders
                .into_iter()
                .map(|(order, car)| Order::from_entity(order, car))
                .collect(),
            total,
            page: list.page,
            limit: list.limit,
            order: list.order,
            order_by: list.order_by_name().to_string(),
        })
    }

    /// Gets an order by id, failing with `orders-not-found` when absent
    pub async fn get_by_id(&self, order_id: i32) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        repo.get_by_id(order_id)
            .await?
            .map(|(order, car)| Order::from_entity(order, car))
            .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.to_string()))
    }

    /// Books a car.
    ///
    /// The car must exist and must not be occupied on the pickup date. The check and the
    /// insert are separate statements, so two concurrent requests can both pass the check.
    ///
    /// # Returns
    /// - `Ok(order_id)` - Order created
    /// - `Err(AppError::NotFound)` - Car does not exist
    /// - `Err(AppError::Validation(CarAlreadyOccupied))` - Car is booked on that date
    pub async fn create(&self, params: CreateOrderParams) -> Result<i32, AppError> {
        self.ensure_car_exists(params.car_id).await?;
        self.ensure_car_available(params.car_id, params.pickup_date)
            .await?;

        let repo = OrderRepository::new(self.db);
        let order = repo.create(params).await?;

        tracing::info!("Created order {} for car {}", order.order_id, order.car_id);

        Ok(order.order_id)
    }

    /// Applies a sparse update.
    ///
    /// A supplied car id must reference an existing car. Availability is re-checked only
    /// when both the car id and the pickup date are supplied; the order being updated is not
    /// excluded from that check.
    pub async fn update(&self, order_id: i32, params: UpdateOrderParams) -> Result<(), AppError> {
        if let Some(car_id) = params.car_id {
            self.ensure_car_exists(car_id).await?;

            if let Some(pickup_date) = params.pickup_date {
                self.ensure_car_available(car_id, pickup_date).await?;
            }
        }

        let repo = OrderRepository::new(self.db);
        let affected = repo.update(order_id, params).await?;

        tracing::debug!("Updated order {} ({} rows)", order_id, affected);

        Ok(())
    }

    /// Deletes an order; deleting a missing id is a no-op
    pub async fn delete(&self, order_id: i32) -> Result<(), AppError> {
        let repo = OrderRepository::new(self.db);

        let affected = repo.delete(order_id).await?;

        tracing::debug!("Deleted order {} ({} rows)", order_id, affected);

        Ok(())
    }

    async fn ensure_car_exists(&self, car_id: i32) -> Result<(), AppError> {
        if !CarRepository::new(self.db).exists(car_id).await? {
            return Err(AppError::NotFound(REFERENCED_CAR_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    async fn ensure_car_available(
        &self,
        car_id: i32,
        pickup_date: chrono::NaiveDate,
    ) -> Result<(), AppError> {
        let repo = OrderRepository::new(self.db);

        if repo.is_car_occupied(car_id, pickup_date).await? {
            return Err(ValidationError::CarAlreadyOccupied.into());
        }

        Ok(())
    }
}
