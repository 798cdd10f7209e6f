use super::*;

/// Tests updating a single field.
///
/// Verifies that only `day_rate` changes and the remaining columns keep their values.
///
/// Expected: Ok with one row affected
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let affected = repo
        .update(
            car.car_id,
            UpdateCarParams {
                day_rate: Some(123.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(affected, 1);

    let stored = Car::find_by_id(car.car_id).one(db).await?.unwrap();
    assert_eq!(stored.day_rate, 123.0);
    assert_eq!(stored.car_name, car.car_name);
    assert_eq!(stored.month_rate, car.month_rate);
    assert_eq!(stored.image, car.image);

    Ok(())
}

/// Tests updating every field at once.
///
/// Expected: Ok with all columns replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    repo.update(
        car.car_id,
        UpdateCarParams {
            car_name: Some("Brio".to_string()),
            day_rate: Some(1.0),
            month_rate: Some(2.0),
            image: Some("brio.png".to_string()),
        },
    )
    .await?;

    let stored = Car::find_by_id(car.car_id).one(db).await?.unwrap();
    assert_eq!(stored.car_name, "Brio");
    assert_eq!(stored.day_rate, 1.0);
    assert_eq!(stored.month_rate, 2.0);
    assert_eq!(stored.image.as_deref(), Some("brio.png"));

    Ok(())
}

/// Tests an update with no supplied fields.
///
/// Expected: Ok(0) and the row is untouched
#[tokio::test]
async fn skips_empty_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let affected = repo.update(car.car_id, UpdateCarParams::default()).await?;

    assert_eq!(affected, 0);
    let stored = Car::find_by_id(car.car_id).one(db).await?.unwrap();
    assert_eq!(stored, car);

    Ok(())
}

/// Tests updating a car that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn affects_no_rows_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let affected = repo
        .update(
            42,
            UpdateCarParams {
                car_name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(affected, 0);

    Ok(())
}
