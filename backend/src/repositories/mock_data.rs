use crate::models::studio_models::{
    Booking, BookingStatus, FaqItem, MediaKind, PortfolioItem, Service, Testimonial,
};

fn service(id: i64, title: &str, description: &str, icon_name: &str) -> Service {
    Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon_name: icon_name.to_string(),
    }
}

fn photo(id: i64, src: &str, category: &str, title: &str) -> PortfolioItem {
    PortfolioItem {
        id,
        kind: MediaKind::Photo,
        src: src.to_string(),
        poster: None,
        category: category.to_string(),
        title: title.to_string(),
        has_audio: None,
    }
}

fn video(id: i64, src: &str, poster: &str, title: &str, has_audio: bool) -> PortfolioItem {
    PortfolioItem {
        id,
        kind: MediaKind::Video,
        src: src.to_string(),
        poster: Some(poster.to_string()),
        category: "Films".to_string(),
        title: title.to_string(),
        has_audio: Some(has_audio),
    }
}

fn faq(id: i64, question: &str, answer: &str, is_featured: bool) -> FaqItem {
    FaqItem {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        is_featured,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(1, "Wedding Photography", "Candid and traditional photography that captures the soul of your celebration.", "Camera"),
        service(2, "Cinematic Videography", "High-definition wedding films edited with a storytelling approach.", "Film"),
        service(3, "Pre-Wedding Shoots", "Conceptual and romantic shoots at exotic locations.", "Heart"),
        service(4, "Event Coverage", "Comprehensive coverage for engagements, sangeet, and receptions.", "Users"),
    ]
}

pub fn portfolio() -> Vec<PortfolioItem> {
    const FILM: &str = "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";
    vec![
        photo(1, "https://images.unsplash.com/photo-1648328168368-3a25f2152802?q=80&w=2070&auto=format&fit=crop", "Wedding", "Royal Union"),
        photo(2, "https://images.unsplash.com/photo-1629942878296-c2710a050d95?q=80&w=2070&auto=format&fit=crop", "Pre-Wedding", "Sunset Love"),
        photo(3, "https://images.unsplash.com/photo-1515934751635-c81c6bc9a2d8?q=80&w=2070&auto=format&fit=crop", "Wedding", "The Vows"),
        video(4, FILM, "https://images.pexels.com/photos/1651411/pexels-photo-1651411.jpeg", "Cinematic Highlights", true),
        photo(5, "https://images.pexels.com/photos/2058070/pexels-photo-2058070.jpeg", "Details", "Golden Details"),
        photo(6, "https://images.pexels.com/photos/725462/pexels-photo-725462.jpeg", "Wedding", "Joyful Tears"),
        photo(7, "https://images.unsplash.com/photo-1606800052052-a08af7148866?q=80&w=2070&auto=format&fit=crop", "Wedding", "Eternal Bond"),
        video(8, FILM, "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=2070&auto=format&fit=crop", "Silent Emotions", false),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    let entry = |id: i64, name: &str, title: &str, text: &str, location: &str, image: &str| Testimonial {
        id,
        name: name.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        location: location.to_string(),
        image: image.to_string(),
    };
    vec![
        entry(1, "Aditi & Rahul", "A Cinematic Dream", "DC Art Production made our wedding look like a movie! The team was so professional and patient.", "Delhi", "https://images.unsplash.com/photo-1621621667797-e06afc217fb0?q=80&w=2070&auto=format&fit=crop"),
        entry(2, "Priya & Aman", "Best Decision Ever", "We are absolutely in love with our pre-wedding shoot. The creativity they showed was unmatched.", "Gurgaon", "https://images.unsplash.com/photo-1583939003579-730e3918a45a?q=80&w=1974&auto=format&fit=crop"),
        entry(3, "Sneha & Vikram", "Memories for Life", "The cinematic film they created for us is a masterpiece. It captured the essence of our family.", "Noida", "https://images.unsplash.com/photo-1511285560982-1351cdeb9821?q=80&w=2070&auto=format&fit=crop"),
    ]
}

pub fn faqs() -> Vec<FaqItem> {
    vec![
        faq(1, "Do you travel for destination weddings?", "Yes, we love traveling! We have covered weddings across India and internationally.", true),
        faq(2, "How far in advance should we book you?", "We recommend booking at least 6-12 months in advance.", true),
        faq(3, "What is your payment policy?", "We take a 25% advance to block the dates.", true),
        faq(4, "Do you provide raw footage?", "We provide processed JPEGs and edited films. Raw footage is extra.", true),
        faq(5, "What equipment do you use?", "We use high-end Sony and Canon mirrorless cameras with prime lenses.", false),
        faq(6, "Can we customize the package?", "Yes, all packages are customizable.", false),
        faq(7, "Do you offer drone services?", "Yes, drone coverage is available as an add-on.", false),
    ]
}

pub fn bookings() -> Vec<Booking> {
    vec![Booking {
        id: 1,
        name: "John Doe".to_string(),
        phone: "9876543210".to_string(),
        email: "john@example.com".to_string(),
        date: "2024-12-25".to_string(),
        message: "Need photography for my wedding.".to_string(),
        status: BookingStatus::New,
        created_at: "2024-01-01".to_string(),
    }]
}
