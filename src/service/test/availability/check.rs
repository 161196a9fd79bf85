use super::*;

/// Tests a party larger than the remaining places is refused.
///
/// A 20-place trail with 18 visitors booked leaves 2 vacancies; a party
/// of 3 does not fit.
///
/// Expected: available = false with the vacancy count in the reason
#[tokio::test]
async fn refuses_party_larger_than_vacancies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let trail = factory::trail::TrailFactory::new(db, park.id)
        .max_capacity(Some(20))
        .build()
        .await?;
    let visit_date = Utc::now().date_naive() + Duration::days(3);

    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .trail_id(Some(trail.id))
        .visit_date(visit_date)
        .visitors(18)
        .build()
        .await?;

    let verdict = AvailabilityService::new(db)
        .check(&CheckAvailabilityParams {
            park_id: park.id,
            trail_id: Some(trail.id),
            visit_date,
            visitors: 3,
        })
        .await?;

    assert!(!verdict.available);
    assert_eq!(verdict.vacancies, Some(2));
    assert_eq!(verdict.capacity, Some(20));
    assert_eq!(
        verdict.reason.as_deref(),
        Some("Only 2 places remain on this date")
    );

    Ok(())
}

/// Tests a fitting party on a nearly full trail is accepted with a
/// high-occupancy warning.
///
/// 18 of 20 booked plus a party of 2 projects 100% occupancy.
///
/// Expected: available = true with one warning
#[tokio::test]
async fn warns_on_high_occupancy() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let trail = factory::trail::TrailFactory::new(db, park.id)
        .max_capacity(Some(20))
        .build()
        .await?;
    let visit_date = Utc::now().date_naive() + Duration::days(3);

    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .trail_id(Some(trail.id))
        .visit_date(visit_date)
        .visitors(18)
        .build()
        .await?;

    let verdict = AvailabilityService::new(db)
        .check(&CheckAvailabilityParams {
            park_id: park.id,
            trail_id: Some(trail.id),
            visit_date,
            visitors: 2,
        })
        .await?;

    assert!(verdict.available);
    assert_eq!(verdict.vacancies, Some(2));
    assert_eq!(verdict.warnings.len(), 1);
    assert!(verdict.warnings[0].contains("20 of 20"));

    Ok(())
}

/// Tests a small party on an empty park passes without warnings.
///
/// Expected: available = true, full vacancies, no warnings
#[tokio::test]
async fn accepts_party_on_empty_park() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::ParkFactory::new(db)
        .max_capacity(Some(100))
        .build()
        .await?;

    let verdict = AvailabilityService::new(db)
        .check(&CheckAvailabilityParams {
            park_id: park.id,
            trail_id: None,
            visit_date: Utc::now().date_naive() + Duration::days(1),
            visitors: 4,
        })
        .await?;

    assert!(verdict.available);
    assert_eq!(verdict.vacancies, Some(100));
    assert!(verdict.warnings.is_empty());

    Ok(())
}

/// Tests checking is a pure read: asking twice gives the same verdict.
///
/// Expected: identical results, no capacity consumed
#[tokio::test]
async fn check_consumes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::ParkFactory::new(db)
        .max_capacity(Some(10))
        .build()
        .await?;
    let params = CheckAvailabilityParams {
        park_id: park.id,
        trail_id: None,
        visit_date: Utc::now().date_naive() + Duration::days(2),
        visitors: 10,
    };

    let service = AvailabilityService::new(db);
    let first = service.check(&params).await?;
    let second = service.check(&params).await?;

    assert!(first.available);
    assert_eq!(first.vacancies, second.vacancies);

    Ok(())
}

/// Tests a past visit date is refused.
///
/// Expected: available = false, "Visit date is in the past"
#[tokio::test]
async fn refuses_past_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let verdict = AvailabilityService::new(db)
        .check(&CheckAvailabilityParams {
            park_id: park.id,
            trail_id: None,
            visit_date: Utc::now().date_naive() - Duration::days(1),
            visitors: 1,
        })
        .await?;

    assert!(!verdict.available);
    assert_eq!(verdict.reason.as_deref(), Some("Visit date is in the past"));

    Ok(())
}

/// Tests unknown and inactive parks are refused softly.
///
/// Expected: available = false, not an error
#[tokio::test]
async fn refuses_unknown_or_closed_park() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let closed = factory::park::ParkFactory::new(db).active(false).build().await?;
    let service = AvailabilityService::new(db);
    let date = Utc::now().date_naive() + Duration::days(1);

    for park_id in [closed.id, 9999] {
        let verdict = service
            .check(&CheckAvailabilityParams {
                park_id,
                trail_id: None,
                visit_date: date,
                visitors: 1,
            })
            .await?;

        assert!(!verdict.available);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Park not found or not open for visits")
        );
    }

    Ok(())
}

/// Tests a trail belonging to another park is refused.
///
/// Expected: available = false with the trail reason
#[tokio::test]
async fn refuses_foreign_trail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let other = factory::park::create_park(db).await?;
    let foreign_trail = factory::trail::create_trail(db, other.id).await?;

    let verdict = AvailabilityService::new(db)
        .check(&CheckAvailabilityParams {
            park_id: park.id,
            trail_id: Some(foreign_trail.id),
            visit_date: Utc::now().date_naive() + Duration::days(1),
            visitors: 1,
        })
        .await?;

    assert!(!verdict.available);
    assert_eq!(
        verdict.reason.as_deref(),
        Some("Trail not found or not open for visits")
    );

    Ok(())
}

/// Tests an unbounded park never runs out of places.
///
/// Expected: available = true with no vacancy bookkeeping
#[tokio::test]
async fn unbounded_park_is_always_available() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::ParkFactory::new(db).max_capacity(None).build().await?;
    let visit_date = Utc::now().date_naive() + Duration::days(2);

    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(visit_date)
        .visitors(50)
        .build()
        .await?;

    let verdict = AvailabilityService::new(db)
        .check(&CheckAvailabilityParams {
            park_id: park.id,
            trail_id: None,
            visit_date,
            visitors: 40,
        })
        .await?;

    assert!(verdict.available);
    assert_eq!(verdict.vacancies, None);
    assert_eq!(verdict.capacity, None);

    Ok(())
}

/// Tests the exclusion hook ignores the caller's own booking.
///
/// Expected: a full date still accepts the booking being rechecked
#[tokio::test]
async fn excluded_reservation_frees_its_places() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::ParkFactory::new(db)
        .max_capacity(Some(10))
        .build()
        .await?;
    let visit_date = Utc::now().date_naive() + Duration::days(5);

    let mine = factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(visit_date)
        .visitors(10)
        .build()
        .await?;

    let service = AvailabilityService::new(db);
    let params = CheckAvailabilityParams {
        park_id: park.id,
        trail_id: None,
        visit_date,
        visitors: 10,
    };

    let without_exclusion = service.check(&params).await?;
    let with_exclusion = service.check_excluding(&params, Some(mine.id)).await?;

    assert!(!without_exclusion.available);
    assert!(with_exclusion.available);
    assert_eq!(with_exclusion.vacancies, Some(10));

    Ok(())
}
