//! Application (client/tenant) domain entity.

use serde::{Deserialize, Serialize};

/// A registered client of the SSO service.
///
/// Applications are provisioned out of band and read-only here. The secret
/// keys token signatures; tokens issued for one application are unverifiable
/// under any other application's secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub secret: String,
}
