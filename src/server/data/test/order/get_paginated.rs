use super::*;

async fn seed_orders(db: &sea_orm::DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    let car = factory::car::CarFactory::new(db)
        .car_name("Toyota Avanza")
        .build()
        .await?;

    for (day, pickup) in [(1, "Jakarta Airport"), (3, "Bandung"), (2, "Jakarta Station")] {
        OrderFactory::new(db, car.car_id)
            .order_date(date(2024, 3, day))
            .pickup_location(pickup)
            .build()
            .await?;
    }

    Ok(car)
}

fn list(params: ListParams) -> ListQuery<Order> {
    ListQuery::from_request(&params).unwrap()
}

/// Tests listing with default parameters.
///
/// Verifies that orders are sorted by order date descending and carry the car name.
///
/// Expected: Ok with newest order first
#[tokio::test]
async fn lists_orders_newest_first_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let car = seed_orders(db).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo.get_paginated(&list(ListParams::default())).await?;

    assert_eq!(total, 3);
    let dates: Vec<_> = orders.iter().map(|(o, _)| o.order_date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 3, 3), date(2024, 3, 2), date(2024, 3, 1)]
    );
    assert!(orders
        .iter()
        .all(|(_, c)| c.as_ref().map(|c| c.car_name.as_str()) == Some(car.car_name.as_str())));

    Ok(())
}

/// Tests ascending order on request.
///
/// Expected: Ok with oldest order first
#[tokio::test]
async fn sorts_ascending_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_orders(db).await?;

    let repo = OrderRepository::new(db);
    let (orders, _) = repo
        .get_paginated(&list(ListParams {
            order: Some("ASC".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(orders[0].0.order_date, date(2024, 3, 1));

    Ok(())
}

/// Tests searching on the pickup location.
///
/// Expected: Ok with both Jakarta orders
#[tokio::test]
async fn searches_pickup_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_orders(db).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .get_paginated(&list(ListParams {
            search: Some("jakarta".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(total, 2);
    assert!(orders.iter().all(|(o, _)| o
        .pickup_location
        .as_deref()
        .is_some_and(|p| p.starts_with("Jakarta"))));

    Ok(())
}

/// Tests paging over a filtered result.
///
/// Expected: Ok with one item per page and constant total
#[tokio::test]
async fn paginates_filtered_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_orders(db).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .get_paginated(&list(ListParams {
            page: 2,
            limit: 1,
            search: Some("JAKARTA".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].0.order_date, date(2024, 3, 1));

    Ok(())
}
