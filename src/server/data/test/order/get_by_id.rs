use super::*;

/// Tests fetching an order together with its car.
///
/// Expected: Ok(Some) with the joined car
#[tokio::test]
async fn gets_order_with_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (car, order) = factory::create_order_with_car(db).await?;

    let repo = OrderRepository::new(db);
    let (found, joined_car) = repo.get_by_id(order.order_id).await?.unwrap();

    assert_eq!(found, order);
    assert_eq!(joined_car, Some(car));

    Ok(())
}

/// Tests fetching an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo.get_by_id(1).await?;

    assert!(result.is_none());

    Ok(())
}
