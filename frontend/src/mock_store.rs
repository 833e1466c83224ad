//! In-browser stand-in for the backend. Lives for one page session; writes
//! vanish on reload.

use std::cell::RefCell;

use chrono::Utc;

use crate::models::{
    Booking, BookingStatus, FaqItem, MediaKind, NewBooking, NewService, PortfolioItem, Service,
    Testimonial,
};

struct MockStore {
    services: Vec<Service>,
    portfolio: Vec<PortfolioItem>,
    testimonials: Vec<Testimonial>,
    faqs: Vec<FaqItem>,
    bookings: Vec<Booking>,
}

thread_local! {
    static STORE: RefCell<MockStore> = RefCell::new(MockStore::seeded());
}

fn s(v: &str) -> String {
    v.to_string()
}

impl MockStore {
    fn seeded() -> Self {
        let film = "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";
        let photo = |id: i64, src: &str, category: &str, title: &str| PortfolioItem {
            id,
            kind: MediaKind::Photo,
            src: s(src),
            poster: None,
            category: s(category),
            title: s(title),
            has_audio: None,
        };
        let video = |id: i64, poster: &str, title: &str, has_audio: bool| PortfolioItem {
            id,
            kind: MediaKind::Video,
            src: s(film),
            poster: Some(s(poster)),
            category: s("Films"),
            title: s(title),
            has_audio: Some(has_audio),
        };
        let faq = |id: i64, question: &str, answer: &str, is_featured: bool| FaqItem {
            id,
            question: s(question),
            answer: s(answer),
            is_featured,
        };

        MockStore {
            services: vec![
                Service { id: 1, title: s("Wedding Photography"), description: s("Candid and traditional photography that captures the soul of your celebration."), icon_name: s("Camera") },
                Service { id: 2, title: s("Cinematic Videography"), description: s("High-definition wedding films edited with a storytelling approach."), icon_name: s("Film") },
                Service { id: 3, title: s("Pre-Wedding Shoots"), description: s("Conceptual and romantic shoots at exotic locations."), icon_name: s("Heart") },
                Service { id: 4, title: s("Event Coverage"), description: s("Comprehensive coverage for engagements, sangeet, and receptions."), icon_name: s("Users") },
            ],
            portfolio: vec![
                photo(1, "https://images.unsplash.com/photo-1648328168368-3a25f2152802?q=80&w=2070&auto=format&fit=crop", "Wedding", "Royal Union"),
                photo(2, "https://images.unsplash.com/photo-1629942878296-c2710a050d95?q=80&w=2070&auto=format&fit=crop", "Pre-Wedding", "Sunset Love"),
                photo(3, "https://images.unsplash.com/photo-1515934751635-c81c6bc9a2d8?q=80&w=2070&auto=format&fit=crop", "Wedding", "The Vows"),
                video(4, "https://images.pexels.com/photos/1651411/pexels-photo-1651411.jpeg", "Cinematic Highlights", true),
                photo(5, "https://images.pexels.com/photos/2058070/pexels-photo-2058070.jpeg", "Details", "Golden Details"),
                photo(6, "https://images.pexels.com/photos/725462/pexels-photo-725462.jpeg", "Wedding", "Joyful Tears"),
                photo(7, "https://images.unsplash.com/photo-1606800052052-a08af7148866?q=80&w=2070&auto=format&fit=crop", "Wedding", "Eternal Bond"),
                video(8, "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=2070&auto=format&fit=crop", "Silent Emotions", false),
            ],
            testimonials: vec![
                Testimonial { id: 1, name: s("Aditi & Rahul"), title: s("A Cinematic Dream"), text: s("DC Art Production made our wedding look like a movie! The team was so professional and patient."), location: s("Delhi"), image: s("https://images.unsplash.com/photo-1621621667797-e06afc217fb0?q=80&w=2070&auto=format&fit=crop") },
                Testimonial { id: 2, name: s("Priya & Aman"), title: s("Best Decision Ever"), text: s("We are absolutely in love with our pre-wedding shoot. The creativity they showed was unmatched."), location: s("Gurgaon"), image: s("https://images.unsplash.com/photo-1583939003579-730e3918a45a?q=80&w=1974&auto=format&fit=crop") },
                Testimonial { id: 3, name: s("Sneha & Vikram"), title: s("Memories for Life"), text: s("The cinematic film they created for us is a masterpiece. It captured the essence of our family."), location: s("Noida"), image: s("https://images.unsplash.com/photo-1511285560982-1351cdeb9821?q=80&w=2070&auto=format&fit=crop") },
            ],
            faqs: vec![
                faq(1, "Do you travel for destination weddings?", "Yes, we love traveling! We have covered weddings across India and internationally.", true),
                faq(2, "How far in advance should we book you?", "We recommend booking at least 6-12 months in advance.", true),
                faq(3, "What is your payment policy?", "We take a 25% advance to block the dates.", true),
                faq(4, "Do you provide raw footage?", "We provide processed JPEGs and edited films. Raw footage is extra.", true),
                faq(5, "What equipment do you use?", "We use high-end Sony and Canon mirrorless cameras with prime lenses.", false),
                faq(6, "Can we customize the package?", "Yes, all packages are customizable.", false),
                faq(7, "Do you offer drone services?", "Yes, drone coverage is available as an add-on.", false),
            ],
            bookings: vec![Booking {
                id: 1,
                name: s("John Doe"),
                phone: s("9876543210"),
                email: s("john@example.com"),
                date: s("2024-12-25"),
                message: s("Need photography for my wedding."),
                status: BookingStatus::New,
                created_at: s("2024-01-01"),
            }],
        }
    }
}

fn next_id(existing: impl Iterator<Item = i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

pub fn services() -> Vec<Service> {
    STORE.with(|store| store.borrow().services.clone())
}

pub fn portfolio() -> Vec<PortfolioItem> {
    STORE.with(|store| store.borrow().portfolio.clone())
}

pub fn testimonials() -> Vec<Testimonial> {
    STORE.with(|store| store.borrow().testimonials.clone())
}

pub fn faqs() -> Vec<FaqItem> {
    STORE.with(|store| store.borrow().faqs.clone())
}

pub fn bookings() -> Vec<Booking> {
    STORE.with(|store| store.borrow().bookings.clone())
}

pub fn push_booking(new_booking: NewBooking) -> Booking {
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        let booking = Booking {
            id: next_id(store.bookings.iter().map(|b| b.id)),
            name: new_booking.name,
            phone: new_booking.phone,
            email: new_booking.email,
            date: new_booking.date,
            message: new_booking.message,
            status: BookingStatus::New,
            created_at: Utc::now().to_rfc3339(),
        };
        store.bookings.push(booking.clone());
        booking
    })
}

pub fn push_service(new_service: NewService) -> Service {
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        let service = Service {
            id: next_id(store.services.iter().map(|s| s.id)),
            title: new_service.title,
            description: new_service.description,
            icon_name: new_service.icon_name,
        };
        store.services.push(service.clone());
        service
    })
}

pub fn remove_service(id: i64) -> bool {
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        match store.services.iter().position(|s| s.id == id) {
            Some(idx) => {
                store.services.remove(idx);
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_site_content() {
        assert_eq!(services().len(), 4);
        assert_eq!(portfolio().iter().filter(|p| p.is_video()).count(), 2);
        assert_eq!(testimonials().len(), 3);
        assert_eq!(faqs().len(), 7);
        assert_eq!(bookings().len(), 1);
    }

    #[test]
    fn silent_film_is_flagged_without_audio() {
        let silent = portfolio().into_iter().find(|p| p.title == "Silent Emotions").unwrap();
        assert!(!silent.plays_audio());
        assert_eq!(silent.thumbnail(), silent.poster.as_deref().unwrap());
    }

    #[test]
    fn services_can_be_added_and_removed() {
        let added = push_service(NewService {
            title: s("Haldi Coverage"),
            description: s("Colourful candids"),
            icon_name: s("Heart"),
        });
        assert_eq!(services().len(), 5);
        assert!(remove_service(added.id));
        assert!(!remove_service(added.id));
        assert_eq!(services().len(), 4);
    }
}
