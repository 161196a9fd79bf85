use super::*;

/// Tests trail listing follows walking order with unordered points last.
///
/// Expected: ordered points by trail_order, then unordered by id
#[tokio::test]
async fn lists_in_walking_order() -> Result<(), DbErr> {
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

    let third = factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(3))
        .build()
        .await?;
    let unplaced = factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(None)
        .build()
        .await?;
    let first = factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(1))
        .build()
        .await?;

    let points = PointOfInterestRepository::new(db).get_by_trail(trail.id).await?;

    let ids: Vec<i32> = points.iter().map(|point| point.id).collect();
    assert_eq!(ids, vec![first.id, third.id, unplaced.id]);

    Ok(())
}

/// Tests max_order over a trail's points.
///
/// Expected: highest assigned order, or None when nothing is ordered
#[tokio::test]
async fn reports_max_order() -> Result<(), DbErr> {
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
    let empty_trail = factory::trail::create_trail(db, park.id).await?;

    factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(4))
        .build()
        .await?;
    factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(2))
        .build()
        .await?;

    let repo = PointOfInterestRepository::new(db);
    assert_eq!(repo.max_order(trail.id).await?, Some(4));
    assert_eq!(repo.max_order(empty_trail.id).await?, None);

    Ok(())
}

/// Tests rewriting a single point's position.
///
/// Expected: trail_order replaced
#[tokio::test]
async fn set_order_moves_point() -> Result<(), DbErr> {
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
    let point = factory::point_of_interest::PointOfInterestFactory::new(db, trail.id)
        .trail_order(Some(1))
        .build()
        .await?;

    let moved = PointOfInterestRepository::new(db).set_order(point.id, 5).await?;

    assert_eq!(moved.trail_order, Some(5));

    Ok(())
}
