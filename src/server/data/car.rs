use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::{
    data::list::ListQuery,
    model::car::{CreateCarParams, UpdateCarParams},
};

use entity::prelude::Car;

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of cars matching the list filter.
    ///
    /// # Returns
    /// - `Ok((cars, total))` - Cars on the requested page and the number of matching rows
    pub async fn get_paginated(
        &self,
        list: &ListQuery<Car>,
    ) -> Result<(Vec<entity::car::Model>, u64), DbErr> {
        let query = list.apply_filter(Car::find());

        let total = query.clone().count(self.db).await?;
        let cars = list.apply_page(query).all(self.db).await?;

        Ok((cars, total))
    }

    pub async fn get_by_id(&self, car_id: i32) -> Result<Option<entity::car::Model>, DbErr> {
        Car::find_by_id(car_id).one(self.db).await
    }

    pub async fn exists(&self, car_id: i32) -> Result<bool, DbErr> {
        let count = Car::find()
            .filter(entity::car::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a car and returns the stored row with its assigned id.
    pub async fn create(&self, params: CreateCarParams) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            car_name: ActiveValue::Set(params.car_name),
            day_rate: ActiveValue::Set(params.day_rate),
            month_rate: ActiveValue::Set(params.month_rate),
            image: ActiveValue::Set(Some(params.image)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Writes only the supplied fields.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - Zero when the id does not exist or nothing was supplied
    pub async fn update(&self, car_id: i32, params: UpdateCarParams) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let mut update = Car::update_many().filter(entity::car::Column::CarId.eq(car_id));

        if let Some(car_name) = params.car_name {
            update = update.col_expr(entity::car::Column::CarName, Expr::value(car_name));
        }
        if let Some(day_rate) = params.day_rate {
            update = update.col_expr(entity::car::Column::DayRate, Expr::value(day_rate));
        }
        if let Some(month_rate) = params.month_rate {
            update = update.col_expr(entity::car::Column::MonthRate, Expr::value(month_rate));
        }
        if let Some(image) = params.image {
            update = update.col_expr(entity::car::Column::Image, Expr::value(image));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes a car by id; deleting a missing id affects zero rows.
    pub async fn delete(&self, car_id: i32) -> Result<u64, DbErr> {
        let result = Car::delete_by_id(car_id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
