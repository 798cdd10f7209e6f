//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db)
///     .car_name("Honda Jazz")
///     .image(None)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    car_name: String,
    day_rate: f64,
    month_rate: f64,
    image: Option<String>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - car_name: `"Car {id}"` where id is auto-incremented
    /// - day_rate: `100000.0`
    /// - month_rate: `2500000.0`
    /// - image: `Some("https://example.com/car-{id}.png")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            car_name: format!("Car {}", id),
            day_rate: 100_000.0,
            month_rate: 2_500_000.0,
            image: Some(format!("https://example.com/car-{}.png", id)),
        }
    }

    /// Sets the car name.
    pub fn car_name(mut self, car_name: impl Into<String>) -> Self {
        self.car_name = car_name.into();
        self
    }

    /// Sets the daily rental rate.
    pub fn day_rate(mut self, day_rate: f64) -> Self {
        self.day_rate = day_rate;
        self
    }

    /// Sets the monthly rental rate.
    pub fn month_rate(mut self, month_rate: f64) -> Self {
        self.month_rate = month_rate;
        self
    }

    /// Sets the image URL.
    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            car_id: ActiveValue::NotSet,
            car_name: ActiveValue::Set(self.car_name),
            day_rate: ActiveValue::Set(self.day_rate),
            month_rate: ActiveValue::Set(self.month_rate),
            image: ActiveValue::Set(self.image),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
