use super::*;

/// Tests deleting an order by id.
///
/// Verifies that the car is left in place.
///
/// Expected: Ok(1) with the order removed
#[tokio::test]
async fn deletes_order_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, order) = factory::create_order_with_car(db).await?;

    let repo = OrderRepository::new(db);
    let affected = repo.delete(order.order_id).await?;

    assert_eq!(affected, 1);
    assert!(Order::find_by_id(order.order_id).one(db).await?.is_none());
    assert!(Car::find_by_id(car.car_id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting an order that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_order_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let affected = repo.delete(77).await?;

    assert_eq!(affected, 0);

    Ok(())
}
