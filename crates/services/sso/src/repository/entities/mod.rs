//! SeaORM entities backing the storage port.

pub mod app;
pub mod user;
