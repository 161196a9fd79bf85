use super::*;

/// Tests creating a trail in an unknown park.
///
/// Expected: NotFound
#[tokio::test]
async fn rejects_unknown_park() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TrailService::new(db)
        .create(CreateTrailParams {
            park_id: 777,
            name: "Ghost Trail".to_string(),
            description: None,
            difficulty: None,
            distance_km: None,
            estimated_minutes: None,
            max_capacity: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests per-park name uniqueness.
///
/// Expected: InvalidOperation for a name already used in the park
#[tokio::test]
async fn rejects_duplicate_name_in_park() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .with_table(entity::prelude::Trail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let park = factory::park::create_park(db).await?;
    factory::trail::TrailFactory::new(db, park.id).name("Rio Escondido").build().await?;

    let result = TrailService::new(db)
        .create(CreateTrailParams {
            park_id: park.id,
            name: "Rio Escondido".to_string(),
            description: None,
            difficulty: None,
            distance_km: None,
            estimated_minutes: None,
            max_capacity: None,
        })
        .await;

    match result {
        Err(AppError::InvalidOperation(reason)) => {
            assert_eq!(
                reason,
                "A trail named 'Rio Escondido' already exists in this park"
            );
        }
        other => panic!("expected InvalidOperation, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
