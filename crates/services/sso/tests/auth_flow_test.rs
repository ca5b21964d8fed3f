//! End-to-end auth flow tests against an in-memory SQLite store.
//!
//! These run the real migrations and the real SeaORM store, so they cover
//! the unique-constraint mapping the mock-based unit tests cannot.

use std::sync::Arc;

use chrono::Duration;
use sea_orm::{ActiveModelTrait, Set};

use common::AppError;
use domain::HashingParams;
use sso_service_lib::infra::Database;
use sso_service_lib::repository::entities::app;
use sso_service_lib::repository::SqlStore;
use sso_service_lib::service::{decode_token, AuthService, Authenticator};

const APP_ID: i32 = 42;
const APP_SECRET: &str = "app-secret-42";

async fn setup() -> Authenticator {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let conn = db.get_connection();

    // Apps are provisioned out of band; seed one directly.
    app::ActiveModel {
        id: Set(APP_ID),
        name: Set("test-app".to_string()),
        secret: Set(APP_SECRET.to_string()),
    }
    .insert(&conn)
    .await
    .unwrap();

    let store = Arc::new(SqlStore::new(conn));
    Authenticator::new(
        store.clone(),
        store.clone(),
        store,
        Duration::hours(1),
        HashingParams::fast(),
    )
}

#[tokio::test]
async fn register_then_login_issues_a_valid_token() {
    let auth = setup().await;

    let user_id = auth
        .register_new_user("a@x.com".to_string(), "secret1")
        .await
        .unwrap();
    assert_eq!(user_id, 1);

    let token = auth.login("a@x.com", "secret1", APP_ID).await.unwrap();
    let claims = decode_token(&token, APP_SECRET).unwrap();
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.app_id, APP_ID);
}

#[tokio::test]
async fn duplicate_email_registration_conflicts() {
    let auth = setup().await;

    auth.register_new_user("a@x.com".to_string(), "secret1")
        .await
        .unwrap();

    // Same email with a different password still conflicts.
    let err = auth
        .register_new_user("a@x.com".to_string(), "another")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists(_)));
}

#[tokio::test]
async fn bad_credentials_are_uniform() {
    let auth = setup().await;

    auth.register_new_user("a@x.com".to_string(), "secret1")
        .await
        .unwrap();

    let wrong_password = auth.login("a@x.com", "wrongpw", APP_ID).await.unwrap_err();
    let unknown_email = auth.login("nouser@x.com", "x", APP_ID).await.unwrap_err();

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(unknown_email, AppError::InvalidCredentials));
}

#[tokio::test]
async fn login_against_unknown_app_fails_without_blaming_credentials() {
    let auth = setup().await;

    auth.register_new_user("a@x.com".to_string(), "secret1")
        .await
        .unwrap();

    let err = auth.login("a@x.com", "secret1", 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn admin_flag_lookup() {
    let auth = setup().await;

    let user_id = auth
        .register_new_user("a@x.com".to_string(), "secret1")
        .await
        .unwrap();

    // Freshly registered users are not admins.
    assert!(!auth.is_admin(user_id).await.unwrap());

    // Absent ids look like a credential failure, not a storage miss.
    let err = auth.is_admin(12345).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));
}
