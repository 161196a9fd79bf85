use super::*;

/// Tests the bookable fields can be changed after creation.
///
/// Expected: visit_date and visitors updated, status untouched
#[tokio::test]
async fn updates_booking_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let reservation = factory::reservation::create_reservation(db, user.id, park.id).await?;

    let new_date = Utc::now().date_naive() + Duration::days(14);
    let updated = ReservationRepository::new(db)
        .update(
            reservation.id,
            UpdateReservationParams {
                visit_date: Some(new_date),
                visitors: Some(8),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.visit_date, new_date);
    assert_eq!(updated.visitors, 8);
    assert_eq!(updated.status, ReservationStatus::Active);

    Ok(())
}

/// Tests a booking can be retargeted from the whole park to a trail and
/// back.
///
/// Expected: trail_id follows the nested Option
#[tokio::test]
async fn retargets_trail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let trail = factory::trail::create_trail(db, park.id).await?;
    let reservation = factory::reservation::create_reservation(db, user.id, park.id).await?;

    let repo = ReservationRepository::new(db);
    let on_trail = repo
        .update(
            reservation.id,
            UpdateReservationParams {
                trail_id: Some(Some(trail.id)),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(on_trail.trail_id, Some(trail.id));

    let whole_park = repo
        .update(
            reservation.id,
            UpdateReservationParams {
                trail_id: Some(None),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(whole_park.trail_id, None);

    Ok(())
}
