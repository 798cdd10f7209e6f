use super::*;

/// Tests deleting a car by id.
///
/// Expected: Ok(1) with the car removed
#[tokio::test]
async fn deletes_car_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let affected = repo.delete(car.car_id).await?;

    assert_eq!(affected, 1);
    assert!(Car::find_by_id(car.car_id).one(db).await?.is_none());

    Ok(())
}

/// Tests deleting a car that does not exist.
///
/// Verifies that deleting a missing id is a no-op rather than an error.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_car_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let affected = repo.delete(car.car_id + 100).await?;

    assert_eq!(affected, 0);
    assert!(Car::find_by_id(car.car_id).one(db).await?.is_some());

    Ok(())
}
