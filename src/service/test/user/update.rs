use super::*;

/// Tests changing an account's role and deactivating it.
///
/// Expected: both fields updated
#[tokio::test]
async fn updates_role_and_active_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                role: Some(UserRole::Guide),
                active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.role, UserRole::Guide);
    assert!(!updated.active);

    Ok(())
}

/// Tests moving to an email another account holds.
///
/// Expected: InvalidOperation
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .email("claimed@example.com")
        .build()
        .await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                email: Some("claimed@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidOperation(_))));

    Ok(())
}

/// Tests the account list never carries password hashes.
///
/// Expected: domain users only expose profile fields
#[tokio::test]
async fn list_returns_all_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user_with_role(db, UserRole::Admin).await?;

    let users = UserService::new(db).list().await?;

    assert_eq!(users.len(), 2);

    Ok(())
}
