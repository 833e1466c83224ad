use std::cell::Cell;
use std::rc::Rc;

use futures::join;
use gloo_timers::future::TimeoutFuture;
use log::{info, Level};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod mock_store;
mod models;
mod studio_data;
mod components {
    pub mod chatbot;
    pub mod date_picker;
    pub mod footer;
    pub mod lightbox;
    pub mod loading_screen;
    pub mod nav;
    pub mod section;
    pub mod video_player;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod gallery;
    pub mod home;
}
mod admin {
    pub mod dashboard;
    pub mod login;
}

use admin::{dashboard::AdminDashboard, login::AdminLogin};
use components::{chatbot::Chatbot, footer::Footer, loading_screen::LoadingScreen, nav::Nav};
use pages::{gallery::Gallery, home::Home};
use studio_data::{load_studio_data, StudioContext, StudioData};

/// Minimum time the loading screen stays up.
const MIN_LOADING_MS: u32 = 2_000;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/gallery")]
    Gallery,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        }
        Route::AdminLogin => {
            info!("Rendering Admin login");
            html! { <AdminLogin /> }
        }
        Route::AdminDashboard => {
            info!("Rendering Admin dashboard");
            html! { <AdminDashboard /> }
        }
    }
}

pub fn is_admin_path(path: &str) -> bool {
    path.starts_with("/admin")
}

#[function_component]
fn Layout() -> Html {
    let location = use_location();
    let studio = use_context::<StudioContext>();
    let is_admin = location
        .as_ref()
        .map(|l| is_admin_path(l.path()))
        .unwrap_or(false);
    let faqs = studio.map(|s| s.data.faqs.clone()).unwrap_or_default();

    html! {
        <div class="site">
            if !is_admin {
                <Nav />
            }
            <Switch<Route> render={switch} />
            if !is_admin {
                <Footer />
                <Chatbot {faqs} />
            }
        </div>
    }
}

#[function_component]
fn App() -> Html {
    let loading = use_state(|| true);
    let data = use_state(|| Rc::new(StudioData::default()));
    // flipped on teardown so late fetches never touch a dead component
    let alive = use_memo(|_| Cell::new(true), ());

    {
        let loading = loading.clone();
        let data = data.clone();
        let alive = alive.clone();
        use_effect_with_deps(
            move |_| {
                let guard = alive.clone();
                spawn_local(async move {
                    let (loaded, _) =
                        join!(load_studio_data(), TimeoutFuture::new(MIN_LOADING_MS));
                    if !guard.get() {
                        return;
                    }
                    info!(
                        "Loaded {} services, {} portfolio items",
                        loaded.services.len(),
                        loaded.portfolio.len()
                    );
                    data.set(Rc::new(loaded));
                    loading.set(false);
                });
                move || alive.set(false)
            },
            (),
        );
    }

    let reload = {
        let data = data.clone();
        let alive = alive.clone();
        Callback::from(move |_: ()| {
            let data = data.clone();
            let alive = alive.clone();
            spawn_local(async move {
                let loaded = load_studio_data().await;
                if alive.get() {
                    data.set(Rc::new(loaded));
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingScreen /> };
    }

    let context = StudioContext {
        data: (*data).clone(),
        reload,
    };

    html! {
        <ContextProvider<StudioContext> {context}>
            <BrowserRouter>
                <Layout />
            </BrowserRouter>
        </ContextProvider<StudioContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application ({:?} data source)", config::data_source());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_routes_hide_site_chrome() {
        assert!(is_admin_path("/admin/login"));
        assert!(is_admin_path("/admin/dashboard"));
        assert!(!is_admin_path("/"));
        assert!(!is_admin_path("/gallery"));
    }

    #[test]
    fn routes_resolve_by_path() {
        assert_eq!(Route::recognize("/gallery"), Some(Route::Gallery));
        assert_eq!(Route::recognize("/admin/dashboard"), Some(Route::AdminDashboard));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
