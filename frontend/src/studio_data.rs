use std::rc::Rc;

use futures::join;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::models::{FaqItem, PortfolioItem, Service, Testimonial};

/// The public collections every page renders from, fetched once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudioData {
    pub services: Vec<Service>,
    pub portfolio: Vec<PortfolioItem>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<FaqItem>,
}

#[derive(Clone, PartialEq)]
pub struct StudioContext {
    pub data: Rc<StudioData>,
    pub reload: Callback<()>,
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Failed to load {}: {}", what, e);
        Vec::new()
    })
}

/// Fetches all four collections concurrently. A failed collection is logged
/// and left empty rather than failing the whole load.
pub async fn load_studio_data() -> StudioData {
    let (services, portfolio, testimonials, faqs) = join!(
        api::get_services(),
        api::get_portfolio(),
        api::get_testimonials(),
        api::get_faqs()
    );
    StudioData {
        services: or_empty("services", services),
        portfolio: or_empty("portfolio", portfolio),
        testimonials: or_empty("testimonials", testimonials),
        faqs: or_empty("faqs", faqs),
    }
}

#[hook]
pub fn use_studio_data() -> Rc<StudioData> {
    use_context::<StudioContext>()
        .map(|ctx| ctx.data)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_collection_becomes_empty() {
        let failed: Result<Vec<Service>, ApiError> = Err(ApiError::Network("offline".into()));
        assert!(or_empty("services", failed).is_empty());
        assert_eq!(or_empty("faqs", Ok(vec![1, 2, 3])), vec![1, 2, 3]);
    }

    #[test]
    fn mock_load_fills_every_collection() {
        let data = futures::executor::block_on(load_studio_data());
        assert_eq!(data.services.len(), 4);
        assert_eq!(data.portfolio.len(), 8);
        assert_eq!(data.testimonials.len(), 3);
        assert_eq!(data.faqs.len(), 7);
    }
}
