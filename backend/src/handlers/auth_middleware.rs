use axum::{extract::FromRequestParts, http::request::Parts};
use std::future::Future;
use std::sync::Arc;

use crate::{error::ApiError, AppState};

/// Present on admin-only calls. The bearer token is compared literally with
/// the one handed out by login; there is no signature or expiry behind it.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken;

pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

impl FromRequestParts<Arc<AppState>> for AdminToken {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = match bearer_token(parts) {
            None => Err(ApiError::Unauthorized("No authorization token provided".to_string())),
            Some(token) if token == state.config.admin_token => Ok(AdminToken),
            Some(_) => Err(ApiError::Unauthorized("Invalid token".to_string())),
        };
        async move { result }
    }
}
