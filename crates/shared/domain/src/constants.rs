//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

/// Minimum password length requirement (after trimming whitespace)
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Default token time-to-live in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 1;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;
