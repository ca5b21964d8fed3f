//! Storage layer: port traits, entities, and the SeaORM store.

pub mod entities;
pub mod store;

pub use store::{AppProvider, SqlStore, UserProvider, UserSaver};

#[cfg(test)]
pub use store::{MockAppProvider, MockUserProvider, MockUserSaver};
