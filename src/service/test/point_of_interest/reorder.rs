use super::*;

/// Tests rewriting the walking order of a trail.
///
/// Expected: points come back in the submitted order, positions 1-based
#[tokio::test]
async fn rewrites_walking_order() -> Result<(), AppError> {
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

    let a = factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(1))
        .build()
        .await?;
    let b = factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(2))
        .build()
        .await?;
    let c = factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(None)
        .build()
        .await?;

    let reordered = PointOfInterestService::new(db)
        .reorder(trail.id, vec![c.id, a.id, b.id])
        .await?;

    let ids: Vec<i32> = reordered.iter().map(|point| point.id).collect();
    assert_eq!(ids, vec![c.id, a.id, b.id]);
    assert_eq!(reordered[0].trail_order, Some(1));
    assert_eq!(reordered[2].trail_order, Some(3));

    Ok(())
}

/// Tests a submission that is not a permutation of the trail's points.
///
/// Expected: BadRequest for missing, foreign, and duplicated ids
#[tokio::test]
async fn rejects_incomplete_or_foreign_ids() -> Result<(), AppError> {
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

    let a = factory::point_of_interest::create_point_of_interest(db, trail.id).await?;
    let b = factory::point_of_interest::create_point_of_interest(db, trail.id).await?;

    let service = PointOfInterestService::new(db);

    for bad in [vec![a.id], vec![a.id, b.id, 999], vec![a.id, a.id]] {
        let result = service.reorder(trail.id, bad).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
