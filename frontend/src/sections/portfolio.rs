use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lightbox::{Lightbox, PortfolioFilter, PortfolioView};
use crate::components::section::{Section, SectionHeader};
use crate::models::PortfolioItem;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub items: Vec<PortfolioItem>,
    #[prop_or(true)]
    pub show_gallery_link: bool,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let view = use_state(PortfolioView::default);
    let navigator = use_navigator();

    let visible = view.filter.apply(&props.items);
    let len = visible.len();

    let on_close = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(view.with_lightbox(view.lightbox.close())))
    };
    let on_next = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(view.with_lightbox(view.lightbox.next(len))))
    };
    let on_prev = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(view.with_lightbox(view.lightbox.prev(len))))
    };

    let filter_buttons = PortfolioFilter::ALL.iter().map(|option| {
        let option = *option;
        let onclick = {
            let view = view.clone();
            Callback::from(move |_: MouseEvent| view.set(view.select_filter(option)))
        };
        html! {
            <button
                key={option.label()}
                class={classes!("filter-button", (view.filter == option).then(|| "active"))}
                {onclick}
            >
                { option.label() }
            </button>
        }
    });

    let tiles = visible.iter().enumerate().map(|(index, item)| {
        let onclick = {
            let view = view.clone();
            Callback::from(move |_: MouseEvent| view.set(view.with_lightbox(view.lightbox.open(index, len))))
        };
        html! {
            <div key={item.id} class="portfolio-tile" {onclick}>
                <img src={item.thumbnail().to_string()} alt={item.title.clone()} loading="lazy" />
                <div class="tile-overlay">
                    <span class="tile-badge">{ if item.is_video() { "▶" } else { "🔍" } }</span>
                    <h3>{ &item.title }</h3>
                    <p>{ &item.category }</p>
                </div>
            </div>
        }
    });

    let viewer = view
        .lightbox
        .index()
        .and_then(|i| visible.get(i).cloned())
        .map(|item| html! {
            <Lightbox {item} {on_close} {on_next} {on_prev} />
        });

    let open_gallery = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Gallery);
        }
    });

    html! {
        <Section id="portfolio" class="portfolio-section">
            <SectionHeader title="Visual Diary" subtitle="Our Portfolio" />
            <div class="filter-bar">{ for filter_buttons }</div>
            <div class="portfolio-grid">{ for tiles }</div>
            { for viewer }
            if props.show_gallery_link {
                <div class="gallery-link">
                    <button class="btn btn-outline" onclick={open_gallery}>{"View Full Gallery"}</button>
                </div>
            }
        </Section>
    }
}
