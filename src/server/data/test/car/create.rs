use super::*;

/// Tests creating a car.
///
/// Verifies that the repository inserts the car and returns the stored row with a
/// server-assigned id.
///
/// Expected: Ok with car persisted
#[tokio::test]
async fn creates_car_with_assigned_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let created = repo
        .create(CreateCarParams {
            car_name: "Civic".to_string(),
            day_rate: 50.0,
            month_rate: 1200.0,
            image: "x.png".to_string(),
        })
        .await?;

    assert!(created.car_id > 0);

    let stored = Car::find_by_id(created.car_id).one(db).await?.unwrap();
    assert_eq!(stored.car_name, "Civic");
    assert_eq!(stored.day_rate, 50.0);
    assert_eq!(stored.month_rate, 1200.0);
    assert_eq!(stored.image.as_deref(), Some("x.png"));

    Ok(())
}

/// Tests creating several cars.
///
/// Verifies that each insert receives a distinct id.
///
/// Expected: Ok with unique ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let params = CreateCarParams {
        car_name: "Avanza".to_string(),
        day_rate: 300_000.0,
        month_rate: 6_000_000.0,
        image: "avanza.png".to_string(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.car_id, second.car_id);

    Ok(())
}
