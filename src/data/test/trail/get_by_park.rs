use super::*;

/// Tests listing returns only the requested park's trails, by name.
///
/// Expected: alphabetical trails belonging to the park
#[tokio::test]
async fn lists_only_park_trails_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let other = factory::park::create_park(db).await?;

    factory::trail::TrailFactory::new(db, park.id).name("Summit").build().await?;
    factory::trail::TrailFactory::new(db, park.id).name("Creek").build().await?;
    factory::trail::TrailFactory::new(db, other.id).name("Aqueduct").build().await?;

    let trails = TrailRepository::new(db)
        .get_by_park(park.id, TrailFilter::default())
        .await?;

    let names: Vec<&str> = trails.iter().map(|trail| trail.name.as_str()).collect();
    assert_eq!(names, vec!["Creek", "Summit"]);

    Ok(())
}

/// Tests the name and difficulty filter dimensions.
///
/// Expected: only trails matching both restrictions
#[tokio::test]
async fn filters_by_name_and_difficulty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;

    let hard_ridge = factory::trail::TrailFactory::new(db, park.id)
        .name("Ridge Traverse")
        .difficulty(Some(TrailDifficulty::Hard))
        .build()
        .await?;
    factory::trail::TrailFactory::new(db, park.id)
        .name("Ridge Loop")
        .difficulty(Some(TrailDifficulty::Easy))
        .build()
        .await?;
    factory::trail::TrailFactory::new(db, park.id)
        .name("Meadow Walk")
        .difficulty(Some(TrailDifficulty::Hard))
        .build()
        .await?;

    let repo = TrailRepository::new(db);

    let by_name = repo
        .get_by_park(
            park.id,
            TrailFilter {
                name: Some("Ridge".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(by_name.len(), 2);

    let both = repo
        .get_by_park(
            park.id,
            TrailFilter {
                name: Some("Ridge".to_string()),
                difficulty: Some(TrailDifficulty::Hard),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, hard_ridge.id);

    Ok(())
}

/// Tests the active_only flag omits closed trails.
///
/// Expected: only active trails in the result
#[tokio::test]
async fn active_only_omits_closed_trails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    let open = factory::trail::TrailFactory::new(db, park.id).build().await?;
    factory::trail::TrailFactory::new(db, park.id).active(false).build().await?;

    let trails = TrailRepository::new(db)
        .get_by_park(
            park.id,
            TrailFilter {
                active_only: true,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(trails.len(), 1);
    assert_eq!(trails[0].id, open.id);

    Ok(())
}
