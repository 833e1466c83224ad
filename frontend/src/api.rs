use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use web_sys::window;

use crate::config::{self, DataSource};
use crate::mock_store;
use crate::models::{
    Booking, FaqItem, LoginRequest, LoginResponse, NewBooking, NewService, PortfolioItem, Service,
    Testimonial,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse server response: {0}")]
    Decode(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0} is required")]
    Validation(String),
    #[error("Not authorized, please log in again")]
    Unauthorized,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password";

// Placeholder gate for the admin area; the token carries no meaning.
pub fn check_credentials(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(LoginResponse {
            success: true,
            token: "mock-token".to_string(),
        })
    } else {
        Err(ApiError::InvalidCredentials)
    }
}

pub fn validate_booking(booking: &NewBooking) -> Result<(), ApiError> {
    for (field, value) in [
        ("name", &booking.name),
        ("phone", &booking.phone),
        ("email", &booking.email),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(field.to_string()));
        }
    }
    Ok(())
}

pub fn stored_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::ADMIN_TOKEN_KEY).ok())
        .flatten()
}

pub fn store_token(token: &str) -> bool {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            return storage.set_item(config::ADMIN_TOKEN_KEY, token).is_ok();
        }
    }
    false
}

pub fn clear_token() {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(config::ADMIN_TOKEN_KEY);
        }
    }
}

fn endpoint(action: &str) -> String {
    format!("{}/api?action={}", config::get_backend_url(), action)
}

fn with_token(request: Request, token: Option<&str>) -> Request {
    match token {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    Err(ApiError::Status { status, message })
}

async fn fetch_json<T: DeserializeOwned>(action: &str, token: Option<&str>) -> Result<T, ApiError> {
    let response = with_token(Request::get(&endpoint(action)), token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    action: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = with_token(Request::post(&endpoint(action)), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

fn required_token() -> Result<String, ApiError> {
    stored_token().ok_or(ApiError::Unauthorized)
}

pub async fn get_services() -> Result<Vec<Service>, ApiError> {
    match config::data_source() {
        DataSource::Mock => Ok(mock_store::services()),
        DataSource::Remote => fetch_json("get_services", None).await,
    }
}

pub async fn get_portfolio() -> Result<Vec<PortfolioItem>, ApiError> {
    match config::data_source() {
        DataSource::Mock => Ok(mock_store::portfolio()),
        DataSource::Remote => fetch_json("get_portfolio", None).await,
    }
}

pub async fn get_testimonials() -> Result<Vec<Testimonial>, ApiError> {
    match config::data_source() {
        DataSource::Mock => Ok(mock_store::testimonials()),
        DataSource::Remote => fetch_json("get_testimonials", None).await,
    }
}

pub async fn get_faqs() -> Result<Vec<FaqItem>, ApiError> {
    match config::data_source() {
        DataSource::Mock => Ok(mock_store::faqs()),
        DataSource::Remote => fetch_json("get_faqs", None).await,
    }
}

pub async fn get_bookings() -> Result<Vec<Booking>, ApiError> {
    match config::data_source() {
        DataSource::Mock => Ok(mock_store::bookings()),
        DataSource::Remote => fetch_json("get_bookings", Some(&required_token()?)).await,
    }
}

pub async fn submit_booking(booking: NewBooking) -> Result<(), ApiError> {
    validate_booking(&booking)?;
    match config::data_source() {
        DataSource::Mock => {
            let created = mock_store::push_booking(booking);
            log::info!("Mock booking submitted: {} for {}", created.id, created.date);
            Ok(())
        }
        DataSource::Remote => {
            let _: serde_json::Value = post_json("submit_booking", &booking, None).await?;
            Ok(())
        }
    }
}

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    match config::data_source() {
        DataSource::Mock => check_credentials(&username, &password),
        DataSource::Remote => {
            match post_json("login", &LoginRequest { username, password }, None).await {
                Err(ApiError::Unauthorized) => Err(ApiError::InvalidCredentials),
                other => other,
            }
        }
    }
}

pub async fn add_service(service: NewService) -> Result<Service, ApiError> {
    if service.title.trim().is_empty() {
        return Err(ApiError::Validation("title".to_string()));
    }
    match config::data_source() {
        DataSource::Mock => Ok(mock_store::push_service(service)),
        DataSource::Remote => post_json("add_service", &service, Some(&required_token()?)).await,
    }
}

// Same answer the backend gives for an unknown id.
fn remove_mock_service(id: i64) -> Result<(), ApiError> {
    if mock_store::remove_service(id) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: 404,
            message: format!("No service with id {}", id),
        })
    }
}

pub async fn delete_service(id: i64) -> Result<(), ApiError> {
    match config::data_source() {
        DataSource::Mock => remove_mock_service(id),
        DataSource::Remote => {
            let _: serde_json::Value =
                post_json("delete_service", &json!({ "id": id }), Some(&required_token()?)).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(name: &str, phone: &str, email: &str) -> NewBooking {
        NewBooking {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            ..NewBooking::default()
        }
    }

    #[test]
    fn only_admin_password_pair_logs_in() {
        let ok = check_credentials("admin", "password").unwrap();
        assert!(ok.success);
        assert_eq!(ok.token, "mock-token");

        for (user, pass) in [("admin", "pass"), ("Admin", "password"), ("", ""), ("password", "admin")] {
            assert_eq!(check_credentials(user, pass).unwrap_err(), ApiError::InvalidCredentials);
        }
    }

    #[test]
    fn booking_needs_name_phone_and_email() {
        assert!(validate_booking(&booking("Riya", "98100", "riya@example.com")).is_ok());
        assert_eq!(
            validate_booking(&booking(" ", "98100", "riya@example.com")),
            Err(ApiError::Validation("name".to_string()))
        );
        assert_eq!(
            validate_booking(&booking("Riya", "98100", "")).unwrap_err().to_string(),
            "email is required"
        );
    }

    #[test]
    fn valid_booking_grows_mock_store_by_one() {
        let before = mock_store::bookings().len();
        let created = mock_store::push_booking(booking("Riya", "98100", "riya@example.com"));
        let after = mock_store::bookings();
        assert_eq!(after.len(), before + 1);
        assert_eq!(created.status, crate::models::BookingStatus::New);
    }

    #[test]
    fn deleting_an_unknown_service_is_not_found() {
        assert_eq!(
            remove_mock_service(424242),
            Err(ApiError::Status {
                status: 404,
                message: "No service with id 424242".to_string(),
            })
        );

        let added = mock_store::push_service(NewService {
            title: "Drone Coverage".to_string(),
            description: "Aerial shots".to_string(),
            icon_name: "Star".to_string(),
        });
        assert_eq!(remove_mock_service(added.id), Ok(()));
        assert!(remove_mock_service(added.id).is_err());
    }
}
