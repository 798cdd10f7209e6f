use super::*;

/// Tests creating an order for an existing car.
///
/// Expected: Ok with order persisted and id assigned
#[tokio::test]
async fn creates_order_for_existing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = OrderRepository::new(db);
    let created = repo
        .create(CreateOrderParams {
            car_id: car.car_id,
            order_date: date(2024, 3, 1),
            pickup_date: date(2024, 3, 2),
            dropoff_date: date(2024, 3, 5),
            pickup_location: "Jakarta".to_string(),
            dropoff_location: "Bandung".to_string(),
        })
        .await?;

    assert!(created.order_id > 0);

    let stored = Order::find_by_id(created.order_id).one(db).await?.unwrap();
    assert_eq!(stored.car_id, car.car_id);
    assert_eq!(stored.pickup_date, date(2024, 3, 2));
    assert_eq!(stored.dropoff_date, date(2024, 3, 5));
    assert_eq!(stored.pickup_location.as_deref(), Some("Jakarta"));
    assert_eq!(stored.dropoff_location.as_deref(), Some("Bandung"));

    Ok(())
}
