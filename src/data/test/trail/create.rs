use super::*;

/// Tests trail creation under an existing park.
///
/// Expected: Ok(Model) with the given values and active = true
#[tokio::test]
async fn creates_trail_for_park() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let trail = TrailRepository::new(db)
        .create(CreateTrailParams {
            park_id: park.id,
            name: "Ridge Loop".to_string(),
            description: None,
            difficulty: Some(TrailDifficulty::Hard),
            distance_km: Some(11.4),
            estimated_minutes: Some(240),
            max_capacity: Some(15),
        })
        .await?;

    assert_eq!(trail.park_id, park.id);
    assert_eq!(trail.name, "Ridge Loop");
    assert_eq!(trail.difficulty, Some(TrailDifficulty::Hard));
    assert_eq!(trail.max_capacity, Some(15));
    assert!(trail.active);

    Ok(())
}

/// Tests the same trail name can exist in different parks.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn allows_same_name_across_parks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::park::create_park(db).await?;
    let second = factory::park::create_park(db).await?;

    factory::trail::TrailFactory::new(db, first.id).name("Waterfall Path").build().await?;
    let twin = factory::trail::TrailFactory::new(db, second.id)
        .name("Waterfall Path")
        .build()
        .await?;

    assert_eq!(twin.park_id, second.id);

    Ok(())
}
