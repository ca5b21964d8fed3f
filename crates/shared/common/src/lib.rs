//! Common utilities shared across the SSO service crates.
//!
//! This crate provides:
//! - The closed service-level error taxonomy
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
