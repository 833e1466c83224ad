use std::sync::Arc;

use crate::{
    error::ApiError,
    handlers::studio_dtos::NewBooking,
    models::studio_models::Booking,
    AppState,
};

pub fn validate_booking(booking: &NewBooking) -> Result<(), ApiError> {
    for (field, value) in [
        ("name", &booking.name),
        ("phone", &booking.phone),
        ("email", &booking.email),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("{} is required", field)));
        }
    }
    Ok(())
}

pub fn submit_booking(state: &Arc<AppState>, new_booking: NewBooking) -> Result<Booking, ApiError> {
    validate_booking(&new_booking)?;
    let booking = state.repository.create_booking(new_booking)?;
    tracing::info!("New booking {} for event date {:?}", booking.id, booking.date);
    Ok(booking)
}
