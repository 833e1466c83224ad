use yew::prelude::*;

use crate::sections::portfolio::Portfolio;
use crate::studio_data::use_studio_data;

#[function_component]
pub fn Gallery() -> Html {
    let data = use_studio_data();

    html! {
        <main class="gallery-page">
            <div class="gallery-header">
                <h1>{"Complete Collection"}</h1>
                <p>{"Explore our entire archive of love stories, captured moments, and cinematic films."}</p>
                <div class="section-rule"></div>
            </div>
            <Portfolio items={data.portfolio.clone()} show_gallery_link=false />
        </main>
    }
}
