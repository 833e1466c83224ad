use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section::scroll_to_section;
use crate::config;
use crate::Route;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "home"),
    ("About", "about"),
    ("Services", "services"),
    ("Portfolio", "portfolio"),
    ("Testimonials", "testimonials"),
    ("Contact", "contact"),
];

const SCROLLED_THRESHOLD: f64 = 50.0;
const SCROLL_AFTER_NAVIGATE_MS: u32 = 100;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator();
    let location = use_location();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let offset = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(offset > SCROLLED_THRESHOLD);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::error!("Failed to attach scroll listener: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_home = location
        .as_ref()
        .map(|l| l.path() == "/")
        .unwrap_or(true);

    let go_to = {
        let menu_open = menu_open.clone();
        move |target: &'static str| {
            let menu_open = menu_open.clone();
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                if on_home {
                    scroll_to_section(target);
                    return;
                }
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
                Timeout::new(SCROLL_AFTER_NAVIGATE_MS, move || {
                    scroll_to_section(target);
                })
                .forget();
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let solid = *is_scrolled || *menu_open;

    html! {
        <>
            <div class="nav-shell">
                <nav class={classes!("top-nav", solid.then(|| "solid"))}>
                    <a href="/" class="nav-logo" onclick={go_to("home")}>
                        <span class="logo-main">{"DC ART"}</span>
                        <span class="logo-sub">{"Production"}</span>
                    </a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|(name, id)| html! {
                            <a key={*id} href={format!("#{}", id)} onclick={go_to(*id)}>{ *name }</a>
                        }) }
                    </div>
                    <div class="nav-contact">
                        <a href="https://instagram.com" target="_blank" rel="noreferrer">{"Instagram"}</a>
                        <span class="nav-divider"></span>
                        <a href={config::STUDIO_PHONE_LINK}>{"☎"}</a>
                    </div>
                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </nav>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|(name, id)| html! {
                        <a key={*id} href={format!("#{}", id)} onclick={go_to(*id)}>{ *name }</a>
                    }) }
                </div>
            }
        </>
    }
}
