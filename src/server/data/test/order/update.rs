use super::*;

/// Tests updating a subset of order fields.
///
/// Expected: Ok(1) with untouched columns preserved
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, order) = factory::create_order_with_car(db).await?;

    let repo = OrderRepository::new(db);
    let affected = repo
        .update(
            order.order_id,
            UpdateOrderParams {
                dropoff_date: Some(date(2030, 1, 10)),
                pickup_location: Some("Surabaya".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(affected, 1);

    let stored = Order::find_by_id(order.order_id).one(db).await?.unwrap();
    assert_eq!(stored.dropoff_date, date(2030, 1, 10));
    assert_eq!(stored.pickup_location.as_deref(), Some("Surabaya"));
    assert_eq!(stored.car_id, order.car_id);
    assert_eq!(stored.order_date, order.order_date);
    assert_eq!(stored.pickup_date, order.pickup_date);
    assert_eq!(stored.dropoff_location, order.dropoff_location);

    Ok(())
}

/// Tests moving an order to another car.
///
/// Expected: Ok with the new car id stored
#[tokio::test]
async fn reassigns_order_to_another_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, order) = factory::create_order_with_car(db).await?;
    let other = factory::create_car(db).await?;

    let repo = OrderRepository::new(db);
    repo.update(
        order.order_id,
        UpdateOrderParams {
            car_id: Some(other.car_id),
            ..Default::default()
        },
    )
    .await?;

    let stored = Order::find_by_id(order.order_id).one(db).await?.unwrap();
    assert_eq!(stored.car_id, other.car_id);

    Ok(())
}

/// Tests an update with no supplied fields.
///
/// Expected: Ok(0)
#[tokio::test]
async fn skips_empty_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, order) = factory::create_order_with_car(db).await?;

    let repo = OrderRepository::new(db);
    let affected = repo
        .update(order.order_id, UpdateOrderParams::default())
        .await?;

    assert_eq!(affected, 0);

    Ok(())
}
