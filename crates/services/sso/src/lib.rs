//! SSO Service Library
//!
//! Single-sign-on credential service exposed over gRPC: registration,
//! login with signed-token issuance, and admin-flag lookup.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Duration;
use tonic::transport::Server;
use tracing::info;

use crate::config::SsoServiceConfig;
use crate::grpc::SsoGrpcService;
use crate::infra::Database;
use crate::repository::SqlStore;
use crate::service::Authenticator;
use domain::HashingParams;

/// Run the gRPC server with configuration from the environment.
pub async fn serve(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = SsoServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the gRPC server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: SsoServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database.url).await?;
    let store = Arc::new(SqlStore::new(db.get_connection()));

    // Wire the auth service; one concrete store serves every capability.
    let auth = Arc::new(Authenticator::new(
        store.clone(),
        store.clone(),
        store,
        Duration::hours(config.token.ttl_hours),
        HashingParams::strong(),
    ));

    // Create gRPC service
    let grpc_service = SsoGrpcService::new(auth);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("SSO service listening on {}", addr);

    // Run server
    Server::builder()
        .add_service(proto::SsoServer::new(grpc_service))
        .serve(addr)
        .await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = SsoServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database.url).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
}
