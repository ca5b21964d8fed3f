//! User domain entity.

use serde::{Deserialize, Serialize};

/// User identity record.
///
/// Created on registration and immutable thereafter; the service only ever
/// holds transient copies returned from storage lookups. The password hash
/// never crosses the service boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
}

impl User {
    /// Create a new non-admin user
    pub fn new(id: i64, email: String, password_hash: String) -> Self {
        Self {
            id,
            email,
            password_hash,
            is_admin: false,
        }
    }
}
