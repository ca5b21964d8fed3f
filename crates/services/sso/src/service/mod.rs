//! Business logic: the auth orchestration core and token issuance.

pub mod auth_service;
pub mod token;

pub use auth_service::{AuthService, Authenticator};
pub use token::{decode_token, issue_token, Claims};
