use std::sync::Arc;

use crate::{
    error::ApiError,
    handlers::studio_dtos::{LoginRequest, LoginResponse},
    AppState,
};

// The only admin account. Login is a placeholder gate for the dashboard.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password";

pub fn login(state: &Arc<AppState>, login_req: LoginRequest) -> Result<LoginResponse, ApiError> {
    if login_req.username == ADMIN_USERNAME && login_req.password == ADMIN_PASSWORD {
        tracing::info!("Admin logged in");
        Ok(LoginResponse {
            success: true,
            token: state.config.admin_token.clone(),
        })
    } else {
        tracing::warn!("Rejected login for username {:?}", login_req.username);
        Err(ApiError::Unauthorized("Invalid credentials".to_string()))
    }
}
