use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewBooking {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon_name: String,
}

#[derive(Deserialize)]
pub struct DeleteServiceRequest {
    pub id: i64,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// every call goes through one endpoint, e.g. `/api?action=get_services`
#[derive(Debug, Deserialize)]
pub struct ActionQuery {
    pub action: Option<String>,
}
