//! Domain layer - Core entities and value objects for the SSO service.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user and application entities, the password verifier value object,
//! and the request-shape predicates applied at the transport boundary.

pub mod app;
pub mod constants;
pub mod error;
pub mod password;
pub mod user;
pub mod validation;

pub use app::App;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{HashingParams, Password};
pub use user::User;
