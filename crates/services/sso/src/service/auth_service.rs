//! Auth service - the orchestration core.
//!
//! Each operation is a single linear pipeline with short-circuit failure:
//! storage lookups, password verification, and token issuance wired
//! together behind narrow injected dependencies. The service is stateless
//! between requests and holds no locks; uniqueness under concurrent
//! registration is the storage layer's atomicity guarantee.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tracing::{error, warn};

use common::{AppError, AppResult};
use domain::{HashingParams, Password};

use crate::repository::{AppProvider, UserProvider, UserSaver};
use crate::service::token;

/// Placeholder verifier burned through when the email is unknown, so a
/// missing account costs the same as a wrong password and cannot be
/// distinguished by timing.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a signed token for the given application.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller:
    /// both are `InvalidCredentials`.
    async fn login(&self, email: &str, password: &str, app_id: i32) -> AppResult<String>;

    /// Register a new user, returning the assigned user id.
    ///
    /// Does not validate email/password shape; that is the transport
    /// boundary's job.
    async fn register_new_user(&self, email: String, password: &str) -> AppResult<i64>;

    /// Check whether a user holds the administrator flag.
    async fn is_admin(&self, user_id: i64) -> AppResult<bool>;
}

/// Concrete auth service over the storage port capabilities.
pub struct Authenticator {
    user_saver: Arc<dyn UserSaver>,
    user_provider: Arc<dyn UserProvider>,
    app_provider: Arc<dyn AppProvider>,
    token_ttl: Duration,
    hashing: HashingParams,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        token_ttl: Duration,
        hashing: HashingParams,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            token_ttl,
            hashing,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: &str, password: &str, app_id: i32) -> AppResult<String> {
        let user = match self.user_provider.find_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                // Equalize the cost of the unknown-email path.
                Password::from_hash(DUMMY_HASH).verify(password);
                warn!(operation = "auth.login", "user not found");
                return Err(AppError::InvalidCredentials);
            }
            Err(err) => {
                error!(operation = "auth.login", error = %err, "failed to get user");
                return Err(err);
            }
        };

        if !Password::from_hash(user.password_hash.as_str()).verify(password) {
            warn!(operation = "auth.login", "invalid credentials");
            return Err(AppError::InvalidCredentials);
        }

        // An unknown app is a configuration problem, not a credential
        // problem: the error kind propagates unchanged.
        let app = self.app_provider.find_app(app_id).await.map_err(|err| {
            error!(operation = "auth.login", error = %err, "failed to get app");
            err
        })?;

        token::issue_token(&user, &app, self.token_ttl).map_err(|err| {
            error!(operation = "auth.login", error = %err, "failed to create token");
            err
        })
    }

    async fn register_new_user(&self, email: String, password: &str) -> AppResult<i64> {
        let password_hash = Password::new(password, &self.hashing)
            .map_err(|err| {
                error!(operation = "auth.register", error = %err, "failed to hash password");
                AppError::from(err)
            })?
            .into_string();

        match self.user_saver.save_user(email, password_hash).await {
            Ok(user_id) => Ok(user_id),
            Err(err @ AppError::AlreadyExists(_)) => {
                warn!(operation = "auth.register", "user already exists");
                Err(err)
            }
            Err(err) => {
                error!(operation = "auth.register", error = %err, "failed to save user");
                Err(err)
            }
        }
    }

    async fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        match self.user_provider.is_admin(user_id).await {
            Ok(is_admin) => Ok(is_admin),
            // Absence is reported as a credential failure, matching the
            // login-time ambiguity policy.
            Err(AppError::NotFound(_)) => {
                warn!(operation = "auth.is_admin", "user not found");
                Err(AppError::InvalidCredentials)
            }
            Err(err) => {
                error!(operation = "auth.is_admin", error = %err, "failed to check admin flag");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::Sequence;

    use crate::repository::{MockAppProvider, MockUserProvider, MockUserSaver};
    use crate::service::token::decode_token;
    use domain::{App, User};

    const EMAIL: &str = "a@x.com";
    const PASSWORD: &str = "secret1";
    const APP_ID: i32 = 42;
    const APP_SECRET: &str = "test-app-secret";

    fn hashed(password: &str) -> String {
        Password::new(password, &HashingParams::fast())
            .unwrap()
            .into_string()
    }

    fn test_app() -> App {
        App {
            id: APP_ID,
            name: "test".to_string(),
            secret: APP_SECRET.to_string(),
        }
    }

    fn authenticator(
        saver: MockUserSaver,
        provider: MockUserProvider,
        apps: MockAppProvider,
    ) -> Authenticator {
        Authenticator::new(
            Arc::new(saver),
            Arc::new(provider),
            Arc::new(apps),
            Duration::hours(1),
            HashingParams::fast(),
        )
    }

    #[tokio::test]
    async fn register_then_login_returns_decodable_token() {
        let hash = hashed(PASSWORD);

        let mut saver = MockUserSaver::new();
        saver
            .expect_save_user()
            .withf(|email, _| email == EMAIL)
            .times(1)
            .returning(|_, _| Ok(1));

        let mut provider = MockUserProvider::new();
        let stored = hash.clone();
        provider
            .expect_find_by_email()
            .withf(|email| email == EMAIL)
            .returning(move |_| Ok(User::new(1, EMAIL.to_string(), stored.clone())));

        let mut apps = MockAppProvider::new();
        apps.expect_find_app()
            .withf(|id| *id == APP_ID)
            .returning(|_| Ok(test_app()));

        let auth = authenticator(saver, provider, apps);

        let user_id = auth
            .register_new_user(EMAIL.to_string(), PASSWORD)
            .await
            .unwrap();
        assert_eq!(user_id, 1);

        let issued_at = chrono::Utc::now().timestamp();
        let token = auth.login(EMAIL, PASSWORD, APP_ID).await.unwrap();

        let claims = decode_token(&token, APP_SECRET).unwrap();
        assert_eq!(claims.uid, 1);
        assert_eq!(claims.email, EMAIL);
        assert_eq!(claims.app_id, APP_ID);
        assert!((claims.exp - (issued_at + 3600)).abs() <= 1);
    }

    #[tokio::test]
    async fn duplicate_registration_is_surfaced_distinctly() {
        let mut seq = Sequence::new();
        let mut saver = MockUserSaver::new();
        saver
            .expect_save_user()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(1));
        saver
            .expect_save_user()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(AppError::already_exists("user")));

        let auth = authenticator(saver, MockUserProvider::new(), MockAppProvider::new());

        auth.register_new_user(EMAIL.to_string(), PASSWORD)
            .await
            .unwrap();
        let err = auth
            .register_new_user(EMAIL.to_string(), "other-pw")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let hash = hashed(PASSWORD);

        let mut provider = MockUserProvider::new();
        provider
            .expect_find_by_email()
            .withf(|email| email == EMAIL)
            .returning(move |_| Ok(User::new(1, EMAIL.to_string(), hash.clone())));
        provider
            .expect_find_by_email()
            .withf(|email| email == "nouser@x.com")
            .returning(|_| Err(AppError::not_found("user")));

        let auth = authenticator(MockUserSaver::new(), provider, MockAppProvider::new());

        let wrong_password = auth.login(EMAIL, "wrongpw", APP_ID).await.unwrap_err();
        let unknown_email = auth.login("nouser@x.com", "x", APP_ID).await.unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_app_is_not_a_credential_error() {
        let hash = hashed(PASSWORD);

        let mut provider = MockUserProvider::new();
        provider
            .expect_find_by_email()
            .returning(move |_| Ok(User::new(1, EMAIL.to_string(), hash.clone())));

        let mut apps = MockAppProvider::new();
        apps.expect_find_app()
            .returning(|_| Err(AppError::not_found("app")));

        let auth = authenticator(MockUserSaver::new(), provider, apps);

        let err = auth.login(EMAIL, PASSWORD, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn storage_failures_keep_their_kind() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_find_by_email()
            .returning(|_| Err(AppError::internal("connection reset")));

        let auth = authenticator(MockUserSaver::new(), provider, MockAppProvider::new());

        let err = auth.login(EMAIL, PASSWORD, APP_ID).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn fresh_user_is_not_admin() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_is_admin()
            .withf(|id| *id == 1)
            .returning(|_| Ok(false));

        let auth = authenticator(MockUserSaver::new(), provider, MockAppProvider::new());

        assert!(!auth.is_admin(1).await.unwrap());
    }

    #[tokio::test]
    async fn admin_check_on_unknown_user_reports_invalid_credentials() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_is_admin()
            .returning(|_| Err(AppError::not_found("user")));

        let auth = authenticator(MockUserSaver::new(), provider, MockAppProvider::new());

        let err = auth.is_admin(12345).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }
}
