use super::*;

/// Tests the occupancy calendar covers every day of the range.
///
/// Expected: one entry per day, zeros included, cancelled ignored
#[tokio::test]
async fn fills_every_day_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let today = Utc::now().date_naive();

    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(today + Duration::days(1))
        .visitors(3)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, other.id, park.id)
        .visit_date(today + Duration::days(1))
        .visitors(2)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(today + Duration::days(2))
        .visitors(9)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let days = ReservationService::new(db)
        .calendar(park.id, today, today + Duration::days(3))
        .await?;

    assert_eq!(days.len(), 4);
    assert_eq!(days[0].reservations, 0);
    assert_eq!(days[1].reservations, 2);
    assert_eq!(days[1].visitors, 5);
    assert_eq!(days[2].reservations, 0);
    assert_eq!(days[3].visitors, 0);

    Ok(())
}

/// Tests an inverted range is refused.
///
/// Expected: BadRequest
#[tokio::test]
async fn rejects_inverted_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let today = Utc::now().date_naive();

    let result = ReservationService::new(db)
        .calendar(park.id, today, today - Duration::days(1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests ranges longer than a year are refused.
///
/// Expected: BadRequest
#[tokio::test]
async fn rejects_range_over_a_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let today = Utc::now().date_naive();

    let result = ReservationService::new(db)
        .calendar(park.id, today, today + Duration::days(400))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the calendar of an unknown park.
///
/// Expected: NotFound
#[tokio::test]
async fn rejects_unknown_park() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();

    let result = ReservationService::new(db)
        .calendar(424242, today, today + Duration::days(7))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
