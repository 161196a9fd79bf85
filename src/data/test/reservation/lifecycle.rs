use super::*;

/// Tests marking a check-in records the timestamp without moving status.
///
/// Expected: check_in set, status still Active
#[tokio::test]
async fn check_in_records_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let reservation = factory::reservation::create_reservation(db, user.id, park.id).await?;

    let at = Utc::now();
    let updated = ReservationRepository::new(db)
        .mark_checked_in(reservation.id, at)
        .await?;

    assert_eq!(updated.check_in, Some(at));
    assert_eq!(updated.status, ReservationStatus::Active);

    Ok(())
}

/// Tests marking a check-out completes the reservation.
///
/// Expected: check_out set and status Completed
#[tokio::test]
async fn check_out_completes_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .check_in(Some(Utc::now() - Duration::hours(2)))
        .build()
        .await?;

    let at = Utc::now();
    let updated = ReservationRepository::new(db)
        .mark_checked_out(reservation.id, at)
        .await?;

    assert_eq!(updated.check_out, Some(at));
    assert_eq!(updated.status, ReservationStatus::Completed);

    Ok(())
}

/// Tests cancelling moves the reservation to the cancelled state.
///
/// Expected: status Cancelled, timestamps untouched
#[tokio::test]
async fn cancel_sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let reservation = factory::reservation::create_reservation(db, user.id, park.id).await?;

    let updated = ReservationRepository::new(db)
        .mark_cancelled(reservation.id)
        .await?;

    assert_eq!(updated.status, ReservationStatus::Cancelled);
    assert!(updated.check_in.is_none());

    Ok(())
}

/// Tests lifecycle methods on a missing reservation fail.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_reservation() {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReservationRepository::new(db).mark_cancelled(404).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
