use super::*;

/// Tests a new reservation starts active with no check timestamps.
///
/// Expected: status Active, check_in and check_out both None
#[tokio::test]
async fn creates_active_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let visit_date = Utc::now().date_naive() + Duration::days(3);

    let reservation = ReservationRepository::new(db)
        .create(CreateReservationParams {
            user_id: user.id,
            park_id: park.id,
            trail_id: None,
            visit_date,
            entry_time: None,
            visitors: 4,
        })
        .await?;

    assert_eq!(reservation.user_id, user.id);
    assert_eq!(reservation.park_id, park.id);
    assert_eq!(reservation.visit_date, visit_date);
    assert_eq!(reservation.visitors, 4);
    assert_eq!(reservation.status, ReservationStatus::Active);
    assert!(reservation.check_in.is_none());
    assert!(reservation.check_out.is_none());

    Ok(())
}

/// Tests a reservation can target a specific trail.
///
/// Expected: trail_id stored
#[tokio::test]
async fn creates_trail_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let trail = factory::trail::create_trail(db, park.id).await?;

    let reservation = ReservationRepository::new(db)
        .create(CreateReservationParams {
            user_id: user.id,
            park_id: park.id,
            trail_id: Some(trail.id),
            visit_date: Utc::now().date_naive() + Duration::days(1),
            entry_time: None,
            visitors: 2,
        })
        .await?;

    assert_eq!(reservation.trail_id, Some(trail.id));

    Ok(())
}
