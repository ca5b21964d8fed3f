//! Credential token issuance.
//!
//! Tokens are signed HS256 with the application's secret, so a token minted
//! for one application cannot be verified under any other application's
//! secret. Expiry is enforced by the verifier, not by this service; tokens
//! are never persisted.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::AppResult;
use domain::{App, User};

/// Token claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id
    pub uid: i64,
    /// Subject email
    pub email: String,
    /// Application the token was issued for
    pub app_id: i32,
    /// Absolute expiry, unix seconds
    pub exp: i64,
}

/// Issue a signed token binding `user` to `app`, valid for `ttl`.
pub fn issue_token(user: &User, app: &App, ttl: Duration) -> AppResult<String> {
    let claims = Claims {
        uid: user.id,
        email: user.email.clone(),
        app_id: app.id,
        exp: (Utc::now() + ttl).timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(app.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Decode and verify a token under an application secret.
///
/// Fails on bad signature or expired `exp`.
pub fn decode_token(token: &str, secret: &str) -> AppResult<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}
