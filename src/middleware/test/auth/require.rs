use super::*;

/// Tests admin user successfully passes the admin permission check.
///
/// Verifies that the AuthGuard grants access when the user exists in the
/// database, is active, and holds the admin role.
///
/// Expected: Ok(User) with role admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, UserRole::Admin).await?;

    let identity = Identity {
        user_id: user.id,
        role_claim: None,
    };
    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Admin])
        .await;

    let returned_user = result?;
    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.role, UserRole::Admin);

    Ok(())
}

/// Tests visitor is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_visitor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let identity = Identity {
        user_id: user.id,
        role_claim: None,
    };
    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Admin])
        .await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests admin satisfies the staff permission.
///
/// Staff-level operations are open to admins as well; the admin role is
/// a superset of staff.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_satisfies_staff_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, UserRole::Admin).await?;

    let identity = Identity {
        user_id: user.id,
        role_claim: None,
    };
    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Staff])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests guide is denied the staff permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_staff_permission_to_guide() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, UserRole::Guide).await?;

    let identity = Identity {
        user_id: user.id,
        role_claim: None,
    };
    let result = AuthGuard::new(db, &identity)
        .require(&[Permission::Staff])
        .await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}

/// Tests identity pointing at a nonexistent user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let identity = Identity {
        user_id: 9999,
        role_claim: None,
    };
    let result = AuthGuard::new(db, &identity).require(&[]).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::UserNotInDatabase(9999))
    ));

    Ok(())
}

/// Tests a deactivated account is denied regardless of role.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .active(false)
        .build()
        .await?;

    let identity = Identity {
        user_id: user.id,
        role_claim: None,
    };
    let result = AuthGuard::new(db, &identity).require(&[]).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}
