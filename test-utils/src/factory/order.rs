//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// The referenced car must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, car.car_id)
///     .pickup_location("Jakarta")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: i32,
    order_date: NaiveDate,
    pickup_date: NaiveDate,
    dropoff_date: NaiveDate,
    pickup_location: Option<String>,
    dropoff_location: Option<String>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_date: today
    /// - pickup_date: tomorrow
    /// - dropoff_date: three days from today
    /// - pickup_location: `"Pickup {id}"`
    /// - dropoff_location: `"Dropoff {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `car_id` - ID of the car being rented
    pub fn new(db: &'a DatabaseConnection, car_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            car_id,
            order_date: today,
            pickup_date: today + Duration::days(1),
            dropoff_date: today + Duration::days(3),
            pickup_location: Some(format!("Pickup {}", id)),
            dropoff_location: Some(format!("Dropoff {}", id)),
        }
    }

    /// Sets the order date.
    pub fn order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = order_date;
        self
    }

    /// Sets the pickup date.
    pub fn pickup_date(mut self, pickup_date: NaiveDate) -> Self {
        self.pickup_date = pickup_date;
        self
    }

    /// Sets the dropoff date.
    pub fn dropoff_date(mut self, dropoff_date: NaiveDate) -> Self {
        self.dropoff_date = dropoff_date;
        self
    }

    /// Sets the pickup location.
    pub fn pickup_location(mut self, pickup_location: impl Into<String>) -> Self {
        self.pickup_location = Some(pickup_location.into());
        self
    }

    /// Sets the dropoff location.
    pub fn dropoff_location(mut self, dropoff_location: impl Into<String>) -> Self {
        self.dropoff_location = Some(dropoff_location.into());
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            order_id: ActiveValue::NotSet,
            car_id: ActiveValue::Set(self.car_id),
            order_date: ActiveValue::Set(self.order_date),
            pickup_date: ActiveValue::Set(self.pickup_date),
            dropoff_date: ActiveValue::Set(self.dropoff_date),
            pickup_location: ActiveValue::Set(self.pickup_location),
            dropoff_location: ActiveValue::Set(self.dropoff_location),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the specified car.
///
/// Shorthand for `OrderFactory::new(db, car_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    car_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, car_id).build().await
}
