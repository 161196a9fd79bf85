use super::*;

/// Tests a point created without a position is appended at the end.
///
/// Expected: trail_order = max existing order + 1
#[tokio::test]
async fn appends_when_position_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .with_table(entity::prelude::PointOfInterest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let trail = factory::trail::create_trail(db, park.id).await?;
    factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(3))
        .build()
        .await?;

    let point = PointOfInterestService::new(db)
        .create(CreatePointOfInterestParams {
            trail_id: trail.id,
            name: "Last Lookout".to_string(),
            description: None,
            kind: None,
            trail_order: None,
        })
        .await?;

    assert_eq!(point.trail_order, Some(4));

    Ok(())
}

/// Tests the first point of a bare trail starts at position 1.
///
/// Expected: trail_order = Some(1)
#[tokio::test]
async fn first_point_starts_at_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .with_table(entity::prelude::PointOfInterest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let trail = factory::trail::create_trail(db, park.id).await?;

    let point = PointOfInterestService::new(db)
        .create(CreatePointOfInterestParams {
            trail_id: trail.id,
            name: "Trailhead Sign".to_string(),
            description: None,
            kind: None,
            trail_order: None,
        })
        .await?;

    assert_eq!(point.trail_order, Some(1));

    Ok(())
}

/// Tests per-trail name uniqueness.
///
/// Expected: InvalidOperation for a reused name
#[tokio::test]
async fn rejects_duplicate_name_on_trail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .with_table(entity::prelude::PointOfInterest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let trail = factory::trail::create_trail(db, park.id).await?;
    factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .name("Spring")
        .build()
        .await?;

    let result = PointOfInterestService::new(db)
        .create(CreatePointOfInterestParams {
            trail_id: trail.id,
            name: "Spring".to_string(),
            description: None,
            kind: None,
            trail_order: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidOperation(_))));

    Ok(())
}
