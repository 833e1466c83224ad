use yew::prelude::*;

use crate::components::section::{Section, SectionHeader};
use crate::config;

const STATS: [(&str, &str); 3] = [("500+", "Weddings"), ("100%", "Satisfaction"), ("50+", "Cities")];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Section id="about" class="about-section">
            <div class="about-grid">
                <div class="about-images">
                    <img
                        class="about-main-image"
                        src="https://images.unsplash.com/photo-1583939003579-730e3918a45a?q=80&w=1974&auto=format&fit=crop"
                        alt="Couple Moment"
                    />
                    <img
                        class="about-detail-image"
                        src="https://images.unsplash.com/photo-1621621667797-e06afc217fb0?q=80&w=2070&auto=format&fit=crop"
                        alt="Wedding Details"
                    />
                    <div class="corner top-left"></div>
                    <div class="corner bottom-right"></div>
                </div>
                <div class="about-copy">
                    <SectionHeader
                        title="Capturing Real Emotions, Creating Timeless Memories"
                        subtitle={AttrValue::from(format!("About {}", config::STUDIO_NAME))}
                        center=false
                    />
                    <p>
                        {"At "}<strong>{ config::STUDIO_NAME }</strong>
                        {", we believe that a wedding is not just an event; it is a tapestry of emotions, a gathering of love, and the beginning of a beautiful legacy. Based in the heart of Delhi, we are a team of passionate storytellers dedicated to preserving the magic of your special day."}
                    </p>
                    <p>
                        {"Our style is a blend of cinematic grandeur and candid authenticity. We don't just take pictures; we craft visual narratives that allow you to relive your laughter, your tears, and your joy for generations to come."}
                    </p>
                    <div class="about-stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="stat">
                                <h4>{ *value }</h4>
                                <p>{ *label }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </Section>
    }
}
