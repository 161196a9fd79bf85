use super::*;

/// Tests the calendar range query skips cancelled bookings and other parks.
///
/// Expected: only non-cancelled reservations of the park inside the range
#[tokio::test]
async fn returns_range_without_cancelled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let other = factory::park::create_park(db).await?;
    let today = Utc::now().date_naive();

    let kept = factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(today + Duration::days(2))
        .build()
        .await?;
    let completed = factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(today + Duration::days(3))
        .status(ReservationStatus::Completed)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(today + Duration::days(2))
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;
    // Outside the range.
    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(today + Duration::days(30))
        .build()
        .await?;
    // Another park.
    factory::reservation::ReservationFactory::new(db, user.id, other.id)
        .visit_date(today + Duration::days(2))
        .build()
        .await?;

    let rows = ReservationRepository::new(db)
        .get_in_range(park.id, today, today + Duration::days(7))
        .await?;

    let ids: Vec<i32> = rows.iter().map(|reservation| reservation.id).collect();
    assert_eq!(ids, vec![kept.id, completed.id]);

    Ok(())
}
