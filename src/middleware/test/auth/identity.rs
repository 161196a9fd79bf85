use super::*;
use axum::http::HeaderMap;

/// Tests identity extraction from valid headers.
///
/// Expected: Ok(Identity) with the parsed user id and role claim
#[test]
fn parses_id_and_role() {
    let mut headers = HeaderMap::new();
    headers.insert("x-user-id", "42".parse().unwrap());
    headers.insert("x-user-role", "staff".parse().unwrap());

    let identity = Identity::from_headers(&headers).unwrap();

    assert_eq!(identity.user_id, 42);
    assert_eq!(identity.role_claim, Some(UserRole::Staff));
}

/// Tests identity extraction when only the user id header is present.
///
/// The role header is optional; the guard reads the role from the
/// database anyway.
///
/// Expected: Ok(Identity) with role_claim = None
#[test]
fn role_header_is_optional() {
    let mut headers = HeaderMap::new();
    headers.insert("x-user-id", "7".parse().unwrap());

    let identity = Identity::from_headers(&headers).unwrap();

    assert_eq!(identity.user_id, 7);
    assert_eq!(identity.role_claim, None);
}

/// Tests identity extraction with no user id header.
///
/// A request without the injected identity was never authenticated and
/// must never be given a default user.
///
/// Expected: Err(AuthError::MissingIdentity)
#[test]
fn missing_user_id_is_rejected() {
    let headers = HeaderMap::new();

    let error = Identity::from_headers(&headers).unwrap_err();

    assert!(matches!(error, AuthError::MissingIdentity));
}

/// Tests identity extraction with a non-numeric user id.
///
/// Expected: Err(AuthError::InvalidIdentity)
#[test]
fn non_numeric_user_id_is_rejected() {
    let mut headers = HeaderMap::new();
    headers.insert("x-user-id", "abc".parse().unwrap());

    let error = Identity::from_headers(&headers).unwrap_err();

    assert!(matches!(error, AuthError::InvalidIdentity(_)));
}

/// Tests identity extraction with an unknown role value.
///
/// Expected: Err(AuthError::InvalidIdentity)
#[test]
fn unknown_role_is_rejected() {
    let mut headers = HeaderMap::new();
    headers.insert("x-user-id", "42".parse().unwrap());
    headers.insert("x-user-role", "superuser".parse().unwrap());

    let error = Identity::from_headers(&headers).unwrap_err();

    assert!(matches!(error, AuthError::InvalidIdentity(_)));
}
