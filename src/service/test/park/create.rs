use super::*;

/// Tests a duplicate park name is refused before hitting the database
/// constraint.
///
/// Expected: InvalidOperation naming the park
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::park::ParkFactory::new(db).name("Monte Claro").build().await?;

    let result = ParkService::new(db)
        .create(CreateParkParams {
            name: "Monte Claro".to_string(),
            description: None,
            address: None,
            max_capacity: None,
            opening_hours: None,
        })
        .await;

    match result {
        Err(AppError::InvalidOperation(reason)) => {
            assert_eq!(reason, "A park named 'Monte Claro' already exists");
        }
        other => panic!("expected InvalidOperation, got {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests listing hides closed parks when asked.
///
/// Expected: active_only honours the flag
#[tokio::test]
async fn list_honours_active_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Park)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::park::create_park(db).await?;
    factory::park::ParkFactory::new(db).active(false).build().await?;

    let service = ParkService::new(db);
    assert_eq!(service.list(false, None).await?.len(), 2);
    assert_eq!(service.list(true, None).await?.len(), 1);

    Ok(())
}
