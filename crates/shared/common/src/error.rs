//! Service-level error taxonomy.
//!
//! A small closed enumeration of error kinds carried as typed values.
//! Storage and cryptographic failures keep their kind across layer
//! boundaries; diagnostic context (which operation failed) is attached via
//! `tracing` events at each propagation point rather than string-wrapped
//! into the error itself. The gRPC adapter owns the final mapping to
//! external status codes, per endpoint.

use domain::DomainError;
use thiserror::Error;

/// Application error kinds.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown email, wrong password, or (by policy) unknown user id in the
    /// admin check. Deliberately a single kind so callers cannot distinguish
    /// the reason.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Duplicate registration attempt
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Entity absent from storage
    #[error("{0} not found")]
    NotFound(String),

    /// Malformed input
    #[error("{0}")]
    Validation(String),

    #[cfg(feature = "database")]
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("token signing error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logging
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for the kinds surfaced verbatim to callers; everything else is
    /// presented as an opaque internal error.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials
                | AppError::AlreadyExists(_)
                | AppError::NotFound(_)
                | AppError::Validation(_)
        )
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            // Hashing failures are internal, never user-facing.
            DomainError::Password(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(entity.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn already_exists(entity: impl Into<String>) -> Self {
        AppError::AlreadyExists(entity.into())
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
