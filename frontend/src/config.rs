
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, served from the same origin
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Mock,
    Remote,
}

// Build with STUDIO_DATA_SOURCE=remote to talk to the backend instead of the
// in-browser mock data.
pub fn data_source() -> DataSource {
    parse_data_source(option_env!("STUDIO_DATA_SOURCE"))
}

pub fn parse_data_source(raw: Option<&str>) -> DataSource {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        Some(s) if s == "remote" => DataSource::Remote,
        _ => DataSource::Mock,
    }
}

pub const STUDIO_NAME: &str = "DC Art Production";
pub const WHATSAPP_NUMBER: &str = "919818868753";
pub const STUDIO_PHONE_DISPLAY: &str = "+91 98188 68753";
pub const STUDIO_PHONE_LINK: &str = "tel:+919818868753";
pub const STUDIO_EMAIL: &str = "contact@dcartproduction.com";
pub const STUDIO_ADDRESS: [&str; 2] = ["42/1456 Madangir,", "Delhi, India 110062"];

pub const ADMIN_TOKEN_KEY: &str = "adminToken";

pub fn whatsapp_link(text: &str) -> String {
    format!("https://wa.me/{}?text={}", WHATSAPP_NUMBER, urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_remote_selects_the_backend() {
        assert_eq!(parse_data_source(None), DataSource::Mock);
        assert_eq!(parse_data_source(Some("mock")), DataSource::Mock);
        assert_eq!(parse_data_source(Some(" Remote ")), DataSource::Remote);
    }

    #[test]
    fn whatsapp_link_encodes_free_text() {
        assert_eq!(
            whatsapp_link("Price for 2 days & drone?"),
            "https://wa.me/919818868753?text=Price%20for%202%20days%20%26%20drone%3F"
        );
    }
}
