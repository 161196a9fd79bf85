use super::*;

/// Tests point creation on a trail.
///
/// Expected: Ok(Model) with the given kind and position
#[tokio::test]
async fn creates_point_on_trail() -> Result<(), DbErr> {
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

    let point = PointOfInterestRepository::new(db)
        .create(CreatePointOfInterestParams {
            trail_id: trail.id,
            name: "Eagle Rock".to_string(),
            description: Some("Granite outcrop with valley views".to_string()),
            kind: Some(PoiKind::Viewpoint),
            trail_order: Some(2),
        })
        .await?;

    assert_eq!(point.trail_id, trail.id);
    assert_eq!(point.name, "Eagle Rock");
    assert_eq!(point.kind, Some(PoiKind::Viewpoint));
    assert_eq!(point.trail_order, Some(2));

    Ok(())
}

/// Tests lookup by trail and name.
///
/// Expected: Some for a present name, None otherwise
#[tokio::test]
async fn finds_by_trail_and_name() -> Result<(), DbErr> {
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
        .name("Old Bridge")
        .build()
        .await?;

    let repo = PointOfInterestRepository::new(db);
    assert!(repo.get_by_trail_and_name(trail.id, "Old Bridge").await?.is_some());
    assert!(repo.get_by_trail_and_name(trail.id, "New Bridge").await?.is_none());

    Ok(())
}
