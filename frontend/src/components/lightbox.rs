use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use yew::prelude::*;

use crate::components::video_player::VideoPlayer;
use crate::models::{MediaKind, PortfolioItem};

pub const WHEEL_DEBOUNCE_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioFilter {
    All,
    Wedding,
    PreWedding,
    Films,
}

impl PortfolioFilter {
    pub const ALL: [PortfolioFilter; 4] = [
        PortfolioFilter::All,
        PortfolioFilter::Wedding,
        PortfolioFilter::PreWedding,
        PortfolioFilter::Films,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortfolioFilter::All => "All",
            PortfolioFilter::Wedding => "Wedding",
            PortfolioFilter::PreWedding => "Pre-Wedding",
            PortfolioFilter::Films => "Films",
        }
    }

    // "Wedding" covers every photo, whatever its category.
    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Films => item.kind == MediaKind::Video,
            PortfolioFilter::Wedding => item.kind == MediaKind::Photo,
            PortfolioFilter::PreWedding => {
                item.kind == MediaKind::Photo && item.category == "Pre-Wedding"
            }
        }
    }

    pub fn apply(self, items: &[PortfolioItem]) -> Vec<PortfolioItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Viewing(usize),
}

impl LightboxState {
    pub fn open(self, index: usize, len: usize) -> Self {
        if index < len {
            LightboxState::Viewing(index)
        } else {
            self
        }
    }

    pub fn next(self, len: usize) -> Self {
        match self {
            LightboxState::Viewing(_) if len == 0 => LightboxState::Closed,
            LightboxState::Viewing(i) => LightboxState::Viewing((i + 1) % len),
            LightboxState::Closed => self,
        }
    }

    pub fn prev(self, len: usize) -> Self {
        match self {
            LightboxState::Viewing(_) if len == 0 => LightboxState::Closed,
            LightboxState::Viewing(i) => LightboxState::Viewing((i + len - 1) % len),
            LightboxState::Closed => self,
        }
    }

    pub fn close(self) -> Self {
        LightboxState::Closed
    }

    pub fn index(self) -> Option<usize> {
        match self {
            LightboxState::Viewing(i) => Some(i),
            LightboxState::Closed => None,
        }
    }
}

/// What the portfolio grid shows and which item, if any, is enlarged.
/// Switching the filter always closes the lightbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioView {
    pub filter: PortfolioFilter,
    pub lightbox: LightboxState,
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self {
            filter: PortfolioFilter::All,
            lightbox: LightboxState::Closed,
        }
    }
}

impl PortfolioView {
    pub fn select_filter(self, filter: PortfolioFilter) -> Self {
        Self {
            filter,
            lightbox: LightboxState::Closed,
        }
    }

    pub fn with_lightbox(self, lightbox: LightboxState) -> Self {
        Self { lightbox, ..self }
    }
}

/// Lets one wheel step through per debounce window.
#[derive(Debug, Default)]
pub struct WheelThrottle {
    last_accepted: Option<f64>,
}

impl WheelThrottle {
    pub fn accept(&mut self, now_ms: f64) -> bool {
        match self.last_accepted {
            Some(last) if now_ms - last < WHEEL_DEBOUNCE_MS => false,
            _ => {
                self.last_accepted = Some(now_ms);
                true
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub item: PortfolioItem,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_prev: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let throttle = use_mut_ref(WheelThrottle::default);

    // re-bound whenever the parent hands down fresh callbacks
    {
        let callbacks = (
            props.on_close.clone(),
            props.on_next.clone(),
            props.on_prev.clone(),
        );
        use_effect_with_deps(
            move |(on_close, on_next, on_prev)| {
                let (on_close, on_next, on_prev) =
                    (on_close.clone(), on_next.clone(), on_prev.clone());
                let window = web_sys::window();
                let body = window
                    .as_ref()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body());
                if let Some(body) = &body {
                    let _ = body.style().set_property("overflow", "hidden");
                }

                let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    match e.key().as_str() {
                        "ArrowRight" => on_next.emit(()),
                        "ArrowLeft" => on_prev.emit(()),
                        "Escape" => on_close.emit(()),
                        _ => {}
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(body) = &body {
                        let _ = body.style().remove_property("overflow");
                    }
                }
            },
            callbacks,
        );
    }

    let on_wheel = {
        let on_next = props.on_next.clone();
        let on_prev = props.on_prev.clone();
        Callback::from(move |e: WheelEvent| {
            let delta = e.delta_y();
            if delta == 0.0 || !throttle.borrow_mut().accept(js_sys::Date::now()) {
                return;
            }
            if delta > 0.0 {
                on_next.emit(());
            } else {
                on_prev.emit(());
            }
        })
    };

    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_next.emit(());
        })
    };
    let prev_click = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_prev.emit(());
        })
    };

    let item = &props.item;
    let media = if item.is_video() {
        html! {
            <VideoPlayer
                key={item.id.to_string()}
                src={item.src.clone()}
                poster={item.poster.clone()}
                has_audio={item.plays_audio()}
            />
        }
    } else {
        html! { <img class="lightbox-image" src={item.src.clone()} alt={item.title.clone()} /> }
    };

    html! {
        <div class="lightbox-backdrop" onclick={backdrop_click} onwheel={on_wheel}>
            <button class="lightbox-close" onclick={close_click} aria-label="Close">{"✕"}</button>
            <button class="lightbox-nav prev" onclick={prev_click} aria-label="Previous">{"‹"}</button>
            <div class="lightbox-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                { media }
                <div class="lightbox-caption">
                    <h3>{ &item.title }</h3>
                    <p>{ &item.category }</p>
                </div>
            </div>
            <button class="lightbox-nav next" onclick={next_click} aria-label="Next">{"›"}</button>
            <style>
                {r#"
                .lightbox-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(6px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .lightbox-content {
                    position: relative;
                    max-width: 72rem;
                    width: 100%;
                    max-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .lightbox-image {
                    max-height: 80vh;
                    max-width: 100%;
                    object-fit: contain;
                    border-radius: 4px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .lightbox-caption {
                    text-align: center;
                    margin-top: 1rem;
                    color: #fff;
                }
                .lightbox-caption h3 {
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    margin: 0;
                }
                .lightbox-caption p {
                    color: var(--gold-400);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin: 0.25rem 0 0;
                }
                .lightbox-close, .lightbox-nav {
                    position: absolute;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.7);
                    cursor: pointer;
                    z-index: 110;
                }
                .lightbox-close {
                    top: 1.5rem;
                    right: 1.5rem;
                    font-size: 2rem;
                }
                .lightbox-nav {
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 3.5rem;
                    padding: 0.5rem;
                }
                .lightbox-nav.prev { left: 1rem; }
                .lightbox-nav.next { right: 1rem; }
                .lightbox-close:hover, .lightbox-nav:hover {
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_store;

    #[test]
    fn navigation_wraps_both_ways() {
        let state = LightboxState::Closed.open(0, 3);
        assert_eq!(state.prev(3), LightboxState::Viewing(2));
        assert_eq!(state.next(3).next(3).next(3), LightboxState::Viewing(0));
        assert_eq!(LightboxState::Viewing(1).prev(3).next(3), LightboxState::Viewing(1));
    }

    #[test]
    fn closed_lightbox_ignores_navigation() {
        assert_eq!(LightboxState::Closed.next(5), LightboxState::Closed);
        assert_eq!(LightboxState::Closed.prev(5), LightboxState::Closed);
        assert_eq!(LightboxState::Viewing(4).close(), LightboxState::Closed);
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        assert_eq!(LightboxState::Closed.open(8, 8), LightboxState::Closed);
        assert_eq!(LightboxState::Closed.open(7, 8).index(), Some(7));
    }

    #[test]
    fn single_item_stays_put() {
        let state = LightboxState::Closed.open(0, 1);
        assert_eq!(state.next(1), LightboxState::Viewing(0));
        assert_eq!(state.prev(1), LightboxState::Viewing(0));
    }

    #[test]
    fn changing_filter_closes_the_lightbox() {
        let view = PortfolioView::default().with_lightbox(LightboxState::Viewing(5));
        let films = view.select_filter(PortfolioFilter::Films);
        assert_eq!(films.filter, PortfolioFilter::Films);
        assert_eq!(films.lightbox, LightboxState::Closed);

        // reselecting the active filter still closes it
        let same = films
            .with_lightbox(LightboxState::Viewing(1))
            .select_filter(PortfolioFilter::Films);
        assert_eq!(same.lightbox, LightboxState::Closed);
    }

    #[test]
    fn filters_follow_site_rules() {
        let items = mock_store::portfolio();
        let titles = |filter: PortfolioFilter| -> Vec<String> {
            filter.apply(&items).into_iter().map(|i| i.title).collect()
        };

        assert_eq!(PortfolioFilter::All.apply(&items).len(), 8);
        assert_eq!(titles(PortfolioFilter::Films), ["Cinematic Highlights", "Silent Emotions"]);
        assert_eq!(titles(PortfolioFilter::PreWedding), ["Sunset Love"]);
        // every photo counts as a wedding shot, details and pre-wedding included
        let wedding = titles(PortfolioFilter::Wedding);
        assert_eq!(wedding.len(), 6);
        assert!(wedding.contains(&"Golden Details".to_string()));
        assert!(wedding.contains(&"Sunset Love".to_string()));
    }

    #[test]
    fn wheel_accepts_one_step_per_window() {
        let mut throttle = WheelThrottle::default();
        assert!(throttle.accept(1_000.0));
        assert!(!throttle.accept(1_050.0));
        assert!(!throttle.accept(1_299.0));
        assert!(throttle.accept(1_300.0));
        assert!(!throttle.accept(1_400.0));
        assert!(throttle.accept(2_000.0));
    }
}
