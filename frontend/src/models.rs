use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub category: String,
    pub title: String,
    #[serde(rename = "hasAudio", default, skip_serializing_if = "Option::is_none")]
    pub has_audio: Option<bool>,
}

impl PortfolioItem {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    // grid thumbnail: videos show their poster frame when they have one
    pub fn thumbnail(&self) -> &str {
        match (&self.kind, &self.poster) {
            (MediaKind::Video, Some(poster)) => poster,
            _ => &self.src,
        }
    }

    // videos are assumed to carry sound unless flagged otherwise
    pub fn plays_audio(&self) -> bool {
        self.has_audio.unwrap_or(true)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub text: String,
    pub location: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub is_featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Contacted,
    Booked,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::Contacted => "contacted",
            BookingStatus::Booked => "booked",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub message: String,
    pub status: BookingStatus,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon_name: String,
}

#[derive(Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}
