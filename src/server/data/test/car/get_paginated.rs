use super::*;
use test_utils::factory::car::CarFactory;

async fn seed_cars(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for (name, day_rate) in [
        ("Honda Civic", 500.0),
        ("Toyota Avanza", 300.0),
        ("Honda Jazz", 400.0),
        ("Suzuki Ertiga", 350.0),
        ("Daihatsu Xenia", 250.0),
    ] {
        CarFactory::new(db)
            .car_name(name)
            .day_rate(day_rate)
            .build()
            .await?;
    }

    Ok(())
}

fn list(params: ListParams) -> ListQuery<Car> {
    ListQuery::from_request(&params).unwrap()
}

/// Tests listing with default parameters.
///
/// Verifies that cars are sorted by name ascending and the total counts every row.
///
/// Expected: Ok with all cars sorted by name
#[tokio::test]
async fn lists_cars_sorted_by_name_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cars(db).await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo.get_paginated(&list(ListParams::default())).await?;

    assert_eq!(total, 5);
    let names: Vec<_> = cars.iter().map(|c| c.car_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Daihatsu Xenia",
            "Honda Civic",
            "Honda Jazz",
            "Suzuki Ertiga",
            "Toyota Avanza"
        ]
    );

    Ok(())
}

/// Tests paging through the results.
///
/// Verifies that the page size is respected, the last page is partial and a page past the
/// end is empty while `total` stays constant.
///
/// Expected: Ok with 2, 2, 1 and 0 items
#[tokio::test]
async fn paginates_results_with_constant_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cars(db).await?;

    let repo = CarRepository::new(db);

    for (page, expected) in [(1, 2), (2, 2), (3, 1), (4, 0)] {
        let (cars, total) = repo
            .get_paginated(&list(ListParams {
                page,
                limit: 2,
                ..Default::default()
            }))
            .await?;

        assert_eq!(total, 5);
        assert_eq!(cars.len(), expected, "page {page}");
    }

    Ok(())
}

/// Tests sorting by a whitelisted column in descending order.
///
/// Expected: Ok with day rates non-increasing
#[tokio::test]
async fn sorts_by_requested_column_and_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cars(db).await?;

    let repo = CarRepository::new(db);
    let (cars, _) = repo
        .get_paginated(&list(ListParams {
            order: Some("desc".to_string()),
            order_by: Some("day_rate".to_string()),
            ..Default::default()
        }))
        .await?;

    let rates: Vec<_> = cars.iter().map(|c| c.day_rate).collect();
    assert_eq!(rates, vec![500.0, 400.0, 350.0, 300.0, 250.0]);

    Ok(())
}

/// Tests sorting by an unknown column.
///
/// Verifies that an unknown or injected column falls back to the default sort column
/// without error.
///
/// Expected: Ok with cars sorted by name
#[tokio::test]
async fn falls_back_to_default_sort_for_unknown_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cars(db).await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo
        .get_paginated(&list(ListParams {
            order_by: Some("car_name; DROP TABLE cars;--".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(total, 5);
    assert_eq!(cars[0].car_name, "Daihatsu Xenia");
    assert_eq!(Car::find().all(db).await?.len(), 5);

    Ok(())
}

/// Tests case-insensitive search on the car name.
///
/// Verifies that `total` reflects only matching rows and ignores paging.
///
/// Expected: Ok with both Honda cars
#[tokio::test]
async fn searches_car_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cars(db).await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo
        .get_paginated(&list(ListParams {
            limit: 1,
            search: Some("hONDA".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].car_name, "Honda Civic");

    Ok(())
}

/// Tests that LIKE wildcards in the search term match literally.
///
/// Expected: Ok with only the car whose name contains `%`
#[tokio::test]
async fn treats_wildcards_in_search_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cars(db).await?;
    CarFactory::new(db).car_name("Promo 100% Deal").build().await?;

    let repo = CarRepository::new(db);

    let (cars, total) = repo
        .get_paginated(&list(ListParams {
            search: Some("%".to_string()),
            ..Default::default()
        }))
        .await?;
    assert_eq!(total, 1);
    assert_eq!(cars[0].car_name, "Promo 100% Deal");

    let (_, total) = repo
        .get_paginated(&list(ListParams {
            search: Some("_".to_string()),
            ..Default::default()
        }))
        .await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests searching with a term that has non-ASCII capitals.
///
/// Expected: Ok with the matching car, since the term and the column are folded the same way
#[tokio::test]
async fn searches_non_ascii_terms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Car).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_cars(db).await?;
    CarFactory::new(db).car_name("École Car").build().await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo
        .get_paginated(&list(ListParams {
            search: Some("École".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(cars[0].car_name, "École Car");

    Ok(())
}
