use super::*;

/// Tests catalog entry creation with trail links.
///
/// Expected: Ok(Model) storing the trail ids as a JSON array
#[tokio::test]
async fn creates_entry_with_trails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let species = SpeciesRepository::new(db)
        .create(CreateSpeciesParams {
            scientific_name: Some("Aquila chrysaetos".to_string()),
            common_name: "Golden Eagle".to_string(),
            kind: SpeciesKind::Fauna,
            category: Some("Birds".to_string()),
            description: None,
            trail_ids: vec![3, 7],
        })
        .await?;

    assert_eq!(species.common_name, "Golden Eagle");
    assert_eq!(species.kind, SpeciesKind::Fauna);
    assert_eq!(species.trail_ids, Some(serde_json::json!([3, 7])));

    Ok(())
}

/// Tests an entry with no trail links stores a null trail list.
///
/// Expected: trail_ids column None
#[tokio::test]
async fn empty_trail_list_stores_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let species = SpeciesRepository::new(db)
        .create(CreateSpeciesParams {
            scientific_name: None,
            common_name: "Cork Oak".to_string(),
            kind: SpeciesKind::Flora,
            category: None,
            description: None,
            trail_ids: vec![],
        })
        .await?;

    assert_eq!(species.trail_ids, None);

    Ok(())
}

/// Tests replacing the trail links through update.
///
/// Expected: new JSON array; clearing yields None
#[tokio::test]
async fn update_replaces_trail_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Species)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let species = factory::species::SpeciesFactory::new(db)
        .trail_ids(Some(vec![1]))
        .build()
        .await?;

    let repo = SpeciesRepository::new(db);
    let relinked = repo
        .update(
            species.id,
            UpdateSpeciesParams {
                trail_ids: Some(vec![2, 5]),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(relinked.trail_ids, Some(serde_json::json!([2, 5])));

    let cleared = repo
        .update(
            species.id,
            UpdateSpeciesParams {
                trail_ids: Some(vec![]),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(cleared.trail_ids, None);

    Ok(())
}
