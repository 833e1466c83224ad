use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon_name: String, // one of Camera, Film, Heart, Users, Star on the site
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>, // only videos carry a poster frame
    pub category: String,
    pub title: String,
    #[serde(rename = "hasAudio", default, skip_serializing_if = "Option::is_none")]
    pub has_audio: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub text: String,
    pub location: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Contacted,
    Booked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String, // event date, YYYY-MM-DD
    pub message: String,
    pub status: BookingStatus,
    pub created_at: String,
}
