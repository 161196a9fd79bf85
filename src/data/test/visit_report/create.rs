use super::*;

/// Tests filing a report for a reservation.
///
/// Expected: Ok(Model) linked to the reservation
#[tokio::test]
async fn creates_report() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let reservation = factory::reservation::create_reservation(db, user.id, park.id).await?;

    let report = VisitReportRepository::new(db)
        .create(CreateVisitReportParams {
            reservation_id: reservation.id,
            rating: Some(4),
            comments: Some("Well marked trail".to_string()),
            problems: None,
        })
        .await?;

    assert_eq!(report.reservation_id, reservation.id);
    assert_eq!(report.rating, Some(4));

    Ok(())
}

/// Tests a second report for the same reservation is rejected.
///
/// Expected: Err(DbErr) from the unique reservation constraint
#[tokio::test]
async fn rejects_second_report() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let reservation = factory::reservation::create_reservation(db, user.id, park.id).await?;
    factory::visit_report::create_visit_report(db, reservation.id).await?;

    let result = VisitReportRepository::new(db)
        .create(CreateVisitReportParams {
            reservation_id: reservation.id,
            rating: Some(1),
            comments: None,
            problems: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the lookup by reservation.
///
/// Expected: Some for a filed report, None for a reservation without one
#[tokio::test]
async fn finds_by_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_report_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let park = factory::park::create_park(db).await?;
    let filed = factory::reservation::create_reservation(db, user.id, park.id).await?;
    let silent = factory::reservation::ReservationFactory::new(db, user.id, park.id)
        .visit_date(chrono::Utc::now().date_naive() + chrono::Duration::days(8))
        .build()
        .await?;
    factory::visit_report::create_visit_report(db, filed.id).await?;

    let repo = VisitReportRepository::new(db);
    assert!(repo.get_by_reservation(filed.id).await?.is_some());
    assert!(repo.get_by_reservation(silent.id).await?.is_none());

    Ok(())
}
