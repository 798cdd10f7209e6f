//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a car and an order booking it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((car, order))` - The created car and order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_car(
    db: &DatabaseConnection,
) -> Result<(entity::car::Model, entity::order::Model), DbErr> {
    let car = crate::factory::car::create_car(db).await?;
    let order = crate::factory::order::create_order(db, car.car_id).await?;

    Ok((car, order))
}
