use yew::prelude::*;

use crate::components::section::{Section, SectionHeader};
use crate::models::Service;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Camera,
    Film,
    Heart,
    Users,
    Star,
}

impl ServiceIcon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Camera" => ServiceIcon::Camera,
            "Film" => ServiceIcon::Film,
            "Heart" => ServiceIcon::Heart,
            "Users" => ServiceIcon::Users,
            _ => ServiceIcon::Star,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Camera => "📷",
            ServiceIcon::Film => "🎬",
            ServiceIcon::Heart => "♥",
            ServiceIcon::Users => "👥",
            ServiceIcon::Star => "★",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <Section id="services" dark=true class="services-section">
            <SectionHeader title="Our Premium Services" subtitle="What We Do" dark=true />
            <div class="services-grid">
                { for props.services.iter().map(|service| html! {
                    <div key={service.id} class="service-card">
                        <div class="service-icon">{ ServiceIcon::from_name(&service.icon_name).glyph() }</div>
                        <h3>{ &service.title }</h3>
                        <p>{ &service.description }</p>
                    </div>
                }) }
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icons_fall_back_to_star() {
        assert_eq!(ServiceIcon::from_name("Film"), ServiceIcon::Film);
        assert_eq!(ServiceIcon::from_name("Drone"), ServiceIcon::Star);
        assert_eq!(ServiceIcon::from_name("camera"), ServiceIcon::Star);
        assert_eq!(ServiceIcon::from_name(""), ServiceIcon::Star);
    }
}
