//! gRPC implementation for the Sso service.
//!
//! Validates request shape before delegating to the auth service, and owns
//! the per-endpoint mapping of service error kinds onto gRPC status codes.
//! Status messages never carry internal detail.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::AuthService;
use common::AppError;
use domain::validation;
use proto::sso::{
    sso_server::Sso, IsAdminRequest, IsAdminResponse, LoginRequest, LoginResponse,
    RegisterRequest, RegisterResponse,
};

/// gRPC service wrapper for the auth service.
pub struct SsoGrpcService {
    auth: Arc<dyn AuthService>,
}

impl SsoGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self { auth }
    }
}

#[tonic::async_trait]
impl Sso for SsoGrpcService {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let req = request.into_inner();
        validate_register(&req)?;

        let user_id = self
            .auth
            .register_new_user(req.email, &req.password)
            .await
            .map_err(map_register_error)?;

        Ok(Response::new(RegisterResponse { user_id }))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();
        validate_login(&req)?;

        let token = self
            .auth
            .login(&req.email, &req.password, req.app_id)
            .await
            .map_err(map_login_error)?;

        Ok(Response::new(LoginResponse { token }))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let req = request.into_inner();
        validate_is_admin(&req)?;

        let is_admin = self
            .auth
            .is_admin(req.user_id)
            .await
            .map_err(map_is_admin_error)?;

        Ok(Response::new(IsAdminResponse { is_admin }))
    }
}

fn validate_login(req: &LoginRequest) -> Result<(), Status> {
    if !validation::is_email(&req.email) {
        return Err(Status::invalid_argument("invalid email"));
    }
    if !validation::is_valid_password(&req.password) {
        return Err(Status::invalid_argument("invalid password"));
    }
    if !validation::is_valid_app_id(req.app_id) {
        return Err(Status::invalid_argument("invalid app id"));
    }
    Ok(())
}

fn validate_register(req: &RegisterRequest) -> Result<(), Status> {
    if !validation::is_email(&req.email) {
        return Err(Status::invalid_argument("invalid email"));
    }
    if !validation::is_valid_password(&req.password) {
        return Err(Status::invalid_argument("invalid password"));
    }
    Ok(())
}

fn validate_is_admin(req: &IsAdminRequest) -> Result<(), Status> {
    if !validation::is_valid_user_id(req.user_id) {
        return Err(Status::invalid_argument("invalid user id"));
    }
    Ok(())
}

/// Login surfaces bad credentials as INVALID_ARGUMENT; everything else,
/// including an unknown app, is opaque INTERNAL.
fn map_login_error(err: AppError) -> Status {
    match err {
        AppError::InvalidCredentials => Status::invalid_argument("invalid credentials"),
        _ => Status::internal("internal error"),
    }
}

fn map_register_error(err: AppError) -> Status {
    match err {
        AppError::AlreadyExists(_) => Status::already_exists("user already exists"),
        _ => Status::internal("internal error"),
    }
}

/// The auth service reports an absent user as a credential failure; at this
/// endpoint that is the one error kind indicating absence, surfaced as
/// NOT_FOUND.
fn map_is_admin_error(err: AppError) -> Status {
    match err {
        AppError::InvalidCredentials => Status::not_found("user not found"),
        _ => Status::internal("internal error"),
    }
}
