use std::sync::Arc;

use crate::{
    error::ApiError,
    handlers::{
        auth_middleware::AdminToken,
        studio_dtos::{DeleteServiceRequest, NewService},
    },
    models::studio_models::{Booking, Service},
    AppState,
};

pub fn get_bookings(state: &Arc<AppState>, _admin: AdminToken) -> Result<Vec<Booking>, ApiError> {
    Ok(state.repository.bookings()?)
}

pub fn add_service(
    state: &Arc<AppState>,
    _admin: AdminToken,
    new_service: NewService,
) -> Result<Service, ApiError> {
    if new_service.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    let service = state.repository.create_service(new_service)?;
    tracing::info!("Added service {} ({})", service.id, service.title);
    Ok(service)
}

pub fn delete_service(
    state: &Arc<AppState>,
    _admin: AdminToken,
    req: DeleteServiceRequest,
) -> Result<(), ApiError> {
    if state.repository.delete_service(req.id)? {
        tracing::info!("Deleted service {}", req.id);
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("No service with id {}", req.id)))
    }
}
