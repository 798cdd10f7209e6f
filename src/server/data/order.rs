use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::{
    data::list::ListQuery,
    model::order::{CreateOrderParams, UpdateOrderParams},
};

use entity::prelude::{Car, Order};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of orders, each joined with its car.
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders on the requested page and the number of matching rows
    pub async fn get_paginated(
        &self,
        list: &ListQuery<Order>,
    ) -> Result<
        (
            Vec<(entity::order::Model, Option<entity::car::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let query = list.apply_filter(Order::find().find_also_related(Car));

        let total = query.clone().count(self.db).await?;
        let orders = list.apply_page(query).all(self.db).await?;

        Ok((orders, total))
    }

    pub async fn get_by_id(
        &self,
        order_id: i32,
    ) -> Result<Option<(entity::order::Model, Option<entity::car::Model>)>, DbErr> {
        Order::find_by_id(order_id)
            .find_also_related(Car)
            .one(self.db)
            .await
    }

    /// Checks whether a car is booked on or after the given pickup date.
    ///
    /// A car counts as occupied when any of its orders has `dropoff_date >= pickup_date`.
    /// The new order's own dropoff date is not considered.
    pub async fn is_car_occupied(&self, car_id: i32, pickup_date: NaiveDate) -> Result<bool, DbErr> {
        let count = Order::find()
            .filter(entity::order::Column::CarId.eq(car_id))
            .filter(entity::order::Column::DropoffDate.gte(pickup_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts an order and returns the stored row with its assigned id.
    pub async fn create(&self, params: CreateOrderParams) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            car_id: ActiveValue::Set(params.car_id),
            order_date: ActiveValue::Set(params.order_date),
            pickup_date: ActiveValue::Set(params.pickup_date),
            dropoff_date: ActiveValue::Set(params.dropoff_date),
            pickup_location: ActiveValue::Set(Some(params.pickup_location)),
            dropoff_location: ActiveValue::Set(Some(params.dropoff_location)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Writes only the supplied fields.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - Zero when the id does not exist or nothing was supplied
    pub async fn update(&self, order_id: i32, params: UpdateOrderParams) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let mut update =
            Order::update_many().filter(entity::order::Column::OrderId.eq(order_id));

        if let Some(car_id) = params.car_id {
            update = update.col_expr(entity::order::Column::CarId, Expr::value(car_id));
        }
        if let Some(order_date) = params.order_date {
            update = update.col_expr(entity::order::Column::OrderDate, Expr::value(order_date));
        }
        if let Some(pickup_date) = params.pickup_date {
            update = update.col_expr(entity::order::Column::PickupDate, Expr::value(pickup_date));
        }
        if let Some(dropoff_date) = params.dropoff_date {
            update =
                update.col_expr(entity::order::Column::DropoffDate, Expr::value(dropoff_date));
        }
        if let Some(pickup_location) = params.pickup_location {
            update = update.col_expr(
                entity::order::Column::PickupLocation,
                Expr::value(pickup_location),
            );
        }
        if let Some(dropoff_location) = params.dropoff_location {
            update = update.col_expr(
                entity::order::Column::DropoffLocation,
                Expr::value(dropoff_location),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes an order by id; deleting a missing id affects zero rows.
    pub async fn delete(&self, order_id: i32) -> Result<u64, DbErr> {
        let result = Order::delete_by_id(order_id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
