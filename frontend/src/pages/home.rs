use yew::prelude::*;

use crate::sections::{
    about::About, contact::Contact, faq::Faq, hero::Hero, portfolio::Portfolio,
    services::Services, testimonials::Testimonials,
};
use crate::studio_data::use_studio_data;

#[function_component]
pub fn Home() -> Html {
    let data = use_studio_data();

    html! {
        <main>
            <Hero />
            <About />
            <Services services={data.services.clone()} />
            <Portfolio items={data.portfolio.clone()} />
            <Testimonials testimonials={data.testimonials.clone()} />
            <Faq faqs={data.faqs.clone()} />
            <Contact />
        </main>
    }
}
