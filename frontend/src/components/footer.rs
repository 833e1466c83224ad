use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div>
                    <span class="logo-main">{"DC ART"}</span>
                    <span class="logo-sub">{"Production"}</span>
                </div>
                <p class="footer-tagline">
                    {"Capturing the essence of love and celebration across India and beyond."}
                </p>
                <div class="footer-legal">
                    <span>{ format!("© {} {}", year, config::STUDIO_NAME) }</span>
                    <span class="footer-sep">{"|"}</span>
                    <span>{"All Rights Reserved"}</span>
                </div>
                <div class="footer-made">{"Made with ♥ in India"}</div>
            </div>
        </footer>
    }
}
