//! gRPC transport adapter.

pub mod sso_grpc;

pub use sso_grpc::SsoGrpcService;
