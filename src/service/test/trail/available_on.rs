use super::*;

/// Tests the per-date trail overview of a park.
///
/// Expected: active trails with their booking load; closed trails hidden
#[tokio::test]
async fn reports_per_trail_load() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let date = Utc::now().date_naive() + Duration::days(3);

    let busy = factory::trail::TrailFactory::new(db, park.id)
        .name("Busy")
        .max_capacity(Some(20))
        .build()
        .await?;
    factory::trail::TrailFactory::new(db, park.id)
        .name("Quiet")
        .max_capacity(Some(10))
        .build()
        .await?;
    factory::trail::TrailFactory::new(db, park.id)
        .name("Closed")
        .active(false)
        .build()
        .await?;

    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .trail_id(Some(busy.id))
        .visit_date(date)
        .visitors(12)
        .build()
        .await?;

    let overview = TrailService::new(db).available_on(park.id, date).await?;

    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].trail.name, "Busy");
    assert_eq!(overview[0].occupied, 12);
    assert_eq!(overview[0].vacancies, Some(8));
    assert_eq!(overview[1].trail.name, "Quiet");
    assert_eq!(overview[1].occupied, 0);
    assert_eq!(overview[1].vacancies, Some(10));

    Ok(())
}

/// Tests an unbounded trail reports no vacancy bookkeeping.
///
/// Expected: vacancies None regardless of load
#[tokio::test]
async fn unbounded_trail_has_no_vacancies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let date = Utc::now().date_naive() + Duration::days(1);

    let open_trail = factory::trail::TrailFactory::new(db, park.id)
        .max_capacity(None)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .trail_id(Some(open_trail.id))
        .visit_date(date)
        .visitors(30)
        .build()
        .await?;

    let overview = TrailService::new(db).available_on(park.id, date).await?;

    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0].occupied, 30);
    assert_eq!(overview[0].vacancies, None);

    Ok(())
}
