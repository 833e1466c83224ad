use yew::prelude::*;

use crate::components::section::scroll_to_section;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=2070&auto=format&fit=crop";

fn scroll_on_click(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        scroll_to_section(id);
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-background" style={format!("background-image: url(\"{}\")", HERO_IMAGE)}></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h2 class="hero-eyebrow">{"Est. 2015 • Delhi, India"}</h2>
                <h1 class="hero-title">
                    {"We Capture Every "}
                    <span class="accent">{"Lovely Moment"}</span>
                    {" of Your Wedding"}
                </h1>
                <p class="hero-lede">
                    {"Creative Photographers & Cinematic Filmmakers crafting timeless visual legacies."}
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" onclick={scroll_on_click("contact")}>
                        {"Book a Shoot"}
                    </button>
                    <button class="btn btn-outline-light btn-lg" onclick={scroll_on_click("portfolio")}>
                        {"View Portfolio"}
                    </button>
                </div>
            </div>
            <div class="scroll-indicator" onclick={scroll_on_click("about")}>
                <span>{"Scroll"}</span>
                <span class="scroll-chevron">{"⌄"}</span>
            </div>
        </section>
    }
}
