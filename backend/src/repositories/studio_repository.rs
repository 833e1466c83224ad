use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use thiserror::Error;

use crate::{
    handlers::studio_dtos::{NewBooking, NewService},
    models::studio_models::{Booking, BookingStatus, FaqItem, PortfolioItem, Service, Testimonial},
    repositories::mock_data,
};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} store lock poisoned")]
    Poisoned(&'static str),
}

/// Everything the site reads and writes. The only implementation keeps the
/// collections in memory, so nothing survives a restart.
#[cfg_attr(test, mockall::automock)]
pub trait StudioRepository: Send + Sync {
    fn services(&self) -> Result<Vec<Service>, RepositoryError>;
    fn portfolio(&self) -> Result<Vec<PortfolioItem>, RepositoryError>;
    fn testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError>;
    fn faqs(&self) -> Result<Vec<FaqItem>, RepositoryError>;
    fn bookings(&self) -> Result<Vec<Booking>, RepositoryError>;
    fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, RepositoryError>;
    fn create_service(&self, new_service: NewService) -> Result<Service, RepositoryError>;
    /// Returns false when no service had the given id.
    fn delete_service(&self, id: i64) -> Result<bool, RepositoryError>;
}

pub struct InMemoryStudioRepository {
    services: Mutex<Vec<Service>>,
    portfolio: Mutex<Vec<PortfolioItem>>,
    testimonials: Mutex<Vec<Testimonial>>,
    faqs: Mutex<Vec<FaqItem>>,
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryStudioRepository {
    pub fn seeded() -> Self {
        Self {
            services: Mutex::new(mock_data::services()),
            portfolio: Mutex::new(mock_data::portfolio()),
            testimonials: Mutex::new(mock_data::testimonials()),
            faqs: Mutex::new(mock_data::faqs()),
            bookings: Mutex::new(mock_data::bookings()),
        }
    }
}

fn lock<'a, T>(store: &'a Mutex<T>, name: &'static str) -> Result<MutexGuard<'a, T>, RepositoryError> {
    store.lock().map_err(|_| RepositoryError::Poisoned(name))
}

// Ids are millisecond timestamps, bumped past the current maximum so two
// inserts in the same millisecond still differ.
fn next_id(existing: impl Iterator<Item = i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

impl StudioRepository for InMemoryStudioRepository {
    fn services(&self) -> Result<Vec<Service>, RepositoryError> {
        Ok(lock(&self.services, "services")?.clone())
    }

    fn portfolio(&self) -> Result<Vec<PortfolioItem>, RepositoryError> {
        Ok(lock(&self.portfolio, "portfolio")?.clone())
    }

    fn testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        Ok(lock(&self.testimonials, "testimonials")?.clone())
    }

    fn faqs(&self) -> Result<Vec<FaqItem>, RepositoryError> {
        Ok(lock(&self.faqs, "faqs")?.clone())
    }

    fn bookings(&self) -> Result<Vec<Booking>, RepositoryError> {
        Ok(lock(&self.bookings, "bookings")?.clone())
    }

    fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, RepositoryError> {
        let mut bookings = lock(&self.bookings, "bookings")?;
        let booking = Booking {
            id: next_id(bookings.iter().map(|b| b.id)),
            name: new_booking.name,
            phone: new_booking.phone,
            email: new_booking.email,
            date: new_booking.date,
            message: new_booking.message,
            status: BookingStatus::New,
            created_at: Utc::now().to_rfc3339(),
        };
        bookings.push(booking.clone());
        Ok(booking)
    }

    fn create_service(&self, new_service: NewService) -> Result<Service, RepositoryError> {
        let mut services = lock(&self.services, "services")?;
        let service = Service {
            id: next_id(services.iter().map(|s| s.id)),
            title: new_service.title,
            description: new_service.description,
            icon_name: new_service.icon_name,
        };
        services.push(service.clone());
        Ok(service)
    }

    fn delete_service(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut services = lock(&self.services, "services")?;
        match services.iter().position(|s| s.id == id) {
            Some(idx) => {
                services.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_booking() -> NewBooking {
        NewBooking {
            name: "Meera".to_string(),
            phone: "9811111111".to_string(),
            email: "meera@example.com".to_string(),
            date: "2025-02-14".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn seeded_store_matches_site_content() {
        let repo = InMemoryStudioRepository::seeded();
        assert_eq!(repo.services().unwrap().len(), 4);
        assert_eq!(repo.portfolio().unwrap().len(), 8);
        assert_eq!(repo.testimonials().unwrap().len(), 3);
        assert_eq!(repo.faqs().unwrap().iter().filter(|f| f.is_featured).count(), 4);
        assert_eq!(repo.bookings().unwrap().len(), 1);
    }

    #[test]
    fn create_booking_appends_one_new_record() {
        let repo = InMemoryStudioRepository::seeded();
        let created = repo.create_booking(new_booking()).unwrap();

        let bookings = repo.bookings().unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(created.status, BookingStatus::New);
        assert_eq!(bookings.last(), Some(&created));
    }

    #[test]
    fn ids_stay_unique_for_back_to_back_inserts() {
        let repo = InMemoryStudioRepository::seeded();
        let first = repo.create_booking(new_booking()).unwrap();
        let second = repo.create_booking(new_booking()).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn delete_service_reports_missing_ids() {
        let repo = InMemoryStudioRepository::seeded();
        assert!(repo.delete_service(2).unwrap());
        assert!(!repo.delete_service(2).unwrap());
        assert_eq!(repo.services().unwrap().len(), 3);
    }

    #[test]
    fn next_id_never_goes_backwards() {
        let far_future = Utc::now().timestamp_millis() + 10_000;
        assert_eq!(next_id([1, far_future].into_iter()), far_future + 1);
        assert!(next_id(std::iter::empty()) > 0);
    }
}
