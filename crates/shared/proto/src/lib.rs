//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated definitions for the Sso service
//! (register, login, admin lookup).

/// SSO service definitions.
pub mod sso {
    tonic::include_proto!("sso");
}

// Re-export commonly used items
pub use sso::sso_client::SsoClient;
pub use sso::sso_server::{Sso, SsoServer};
