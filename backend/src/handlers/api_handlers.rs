use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    error::ApiError,
    handlers::{
        admin_handlers, auth_handlers,
        auth_middleware::AdminToken,
        booking_handlers,
        studio_dtos::{ActionQuery, SuccessResponse},
    },
    AppState,
};

fn action_name(query: &ActionQuery) -> Result<&str, ApiError> {
    query
        .action
        .as_deref()
        .ok_or_else(|| ApiError::Validation("Missing action parameter".to_string()))
}

// Bodies are parsed per action, and without insisting on a JSON content type:
// the login form posts a bare body.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn handle_get(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ActionQuery>, QueryRejection>,
    admin: Result<AdminToken, ApiError>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let action = action_name(&query)?;
    tracing::debug!("GET action {}", action);
    let response = match action {
        "get_services" => Json(state.repository.services()?).into_response(),
        "get_portfolio" => Json(state.repository.portfolio()?).into_response(),
        "get_testimonials" => Json(state.repository.testimonials()?).into_response(),
        "get_faqs" => Json(state.repository.faqs()?).into_response(),
        "get_bookings" => Json(admin_handlers::get_bookings(&state, admin?)?).into_response(),
        other => return Err(ApiError::UnknownAction(other.to_string())),
    };
    Ok(response)
}

pub async fn handle_post(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ActionQuery>, QueryRejection>,
    admin: Result<AdminToken, ApiError>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let action = action_name(&query)?;
    tracing::debug!("POST action {}", action);
    let response = match action {
        "submit_booking" => {
            let booking = booking_handlers::submit_booking(&state, parse_body(&body)?)?;
            (
                StatusCode::CREATED,
                Json(json!({ "success": true, "booking": booking })),
            )
                .into_response()
        }
        "login" => Json(auth_handlers::login(&state, parse_body(&body)?)?).into_response(),
        "add_service" => {
            let service = admin_handlers::add_service(&state, admin?, parse_body(&body)?)?;
            (StatusCode::CREATED, Json(service)).into_response()
        }
        "delete_service" => {
            admin_handlers::delete_service(&state, admin?, parse_body(&body)?)?;
            Json(SuccessResponse { success: true }).into_response()
        }
        other => return Err(ApiError::UnknownAction(other.to_string())),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app,
        config::app_config::Config,
        models::studio_models::{Booking, BookingStatus, Service},
        repositories::studio_repository::{
            InMemoryStudioRepository, MockStudioRepository, RepositoryError, StudioRepository,
        },
    };
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn state_with(repository: Arc<dyn StudioRepository>) -> Arc<AppState> {
        Arc::new(AppState {
            repository,
            config: Config::default(),
        })
    }

    fn seeded_state() -> Arc<AppState> {
        state_with(Arc::new(InMemoryStudioRepository::seeded()))
    }

    async fn send(state: Arc<AppState>, request: Request<Body>) -> (StatusCode, Value) {
        let response = app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::post(uri).header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        let (status, body) = send(seeded_state(), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".to_string()));
    }

    #[tokio::test]
    async fn lists_public_collections() {
        let state = seeded_state();
        for (action, expected) in [
            ("get_services", 4),
            ("get_portfolio", 8),
            ("get_testimonials", 3),
            ("get_faqs", 7),
        ] {
            let (status, body) = send(state.clone(), get(&format!("/api?action={}", action))).await;
            assert_eq!(status, StatusCode::OK, "{}", action);
            assert_eq!(body.as_array().map(Vec::len), Some(expected), "{}", action);
        }
    }

    #[tokio::test]
    async fn portfolio_uses_site_field_names() {
        let (_, body) = send(seeded_state(), get("/api?action=get_portfolio")).await;
        let silent = &body[7];
        assert_eq!(silent["type"], "video");
        assert_eq!(silent["hasAudio"], false);
        assert!(body[0].get("poster").is_none());
    }

    #[tokio::test]
    async fn unknown_and_missing_actions_are_bad_requests() {
        let (status, body) = send(seeded_state(), get("/api?action=get_everything")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown action: get_everything");

        let (status, _) = send(seeded_state(), get("/api")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreadable_query_gets_a_json_error() {
        let request = get("/api?action=get_services&action=get_faqs");
        let response = app(seeded_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query string"));

        let request = post(
            "/api?action=login&action=login",
            json!({"username": "admin", "password": "password"}),
            None,
        );
        let (status, body) = send(seeded_state(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn only_the_admin_pair_logs_in() {
        let state = seeded_state();
        let (status, body) = send(
            state.clone(),
            post("/api?action=login", json!({"username": "admin", "password": "password"}), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["token"], "mock-token");

        for (username, password) in [("admin", "Password"), ("root", "password"), ("", "")] {
            let (status, body) = send(
                state.clone(),
                post("/api?action=login", json!({"username": username, "password": password}), None),
            )
            .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body["error"], "Invalid credentials");
        }
    }

    #[tokio::test]
    async fn login_accepts_a_body_without_content_type() {
        let request = Request::post("/api?action=login")
            .body(Body::from(r#"{"username":"admin","password":"password"}"#))
            .unwrap();
        let (status, _) = send(seeded_state(), request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn submitted_booking_shows_up_for_the_admin() {
        let state = seeded_state();
        let (status, body) = send(
            state.clone(),
            post(
                "/api?action=submit_booking",
                json!({
                    "name": "Kavya",
                    "phone": "9800000000",
                    "email": "kavya@example.com",
                    "date": "2025-11-20",
                    "message": "Winter wedding in Jaipur"
                }),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["booking"]["status"], "new");

        let request = Request::get("/api?action=get_bookings")
            .header("Authorization", "Bearer mock-token")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(state, request).await;
        assert_eq!(status, StatusCode::OK);
        let bookings: Vec<Booking> = serde_json::from_value(body).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[1].name, "Kavya");
        assert_eq!(bookings[1].status, BookingStatus::New);
    }

    #[tokio::test]
    async fn booking_requires_name_phone_and_email() {
        let state = seeded_state();
        let (status, body) = send(
            state.clone(),
            post(
                "/api?action=submit_booking",
                json!({"name": "Kavya", "phone": "   ", "email": "kavya@example.com"}),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "phone is required");
        assert_eq!(state.repository.bookings().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bookings_need_the_issued_token() {
        let (status, body) = send(seeded_state(), get("/api?action=get_bookings")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "No authorization token provided");

        let request = Request::get("/api?action=get_bookings")
            .header("Authorization", "Bearer forged")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(seeded_state(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_can_add_and_delete_services() {
        let state = seeded_state();
        let (status, body) = send(
            state.clone(),
            post(
                "/api?action=add_service",
                json!({"title": "Drone Coverage", "description": "Aerial shots", "icon_name": "Star"}),
                Some("mock-token"),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let added: Service = serde_json::from_value(body).unwrap();
        assert_eq!(state.repository.services().unwrap().len(), 5);

        let (status, _) = send(
            state.clone(),
            post("/api?action=delete_service", json!({"id": added.id}), Some("mock-token")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            state.clone(),
            post("/api?action=delete_service", json!({"id": added.id}), Some("mock-token")),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(state.repository.services().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn admin_writes_are_gated() {
        let (status, _) = send(
            seeded_state(),
            post("/api?action=delete_service", json!({"id": 1}), None),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let request = Request::post("/api?action=submit_booking")
            .body(Body::from("not json"))
            .unwrap();
        let (status, body) = send(seeded_state(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn store_failures_become_internal_errors() {
        let mut repository = MockStudioRepository::new();
        repository
            .expect_services()
            .returning(|| Err(RepositoryError::Poisoned("services")));

        let (status, body) = send(state_with(Arc::new(repository)), get("/api?action=get_services")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal error: services store lock poisoned");
    }
}
