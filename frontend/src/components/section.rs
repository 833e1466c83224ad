use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub dark: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!("page-section", props.dark.then(|| "dark"), props.class.clone())}
        >
            <div class="section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(true)]
    pub center: bool,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.center.then(|| "center"), props.dark.then(|| "dark"))}>
            if let Some(subtitle) = &props.subtitle {
                <span class="section-subtitle">{ subtitle }</span>
            }
            <h2 class="section-title">{ &props.title }</h2>
            <div class="section-rule"></div>
        </div>
    }
}

/// Smooth-scrolls to the element with `id`. Returns false when it is not
/// on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}
