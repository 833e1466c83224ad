use futures::join;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::models::{Booking, NewService, PortfolioItem, Service};
use crate::studio_data::StudioContext;
use crate::Route;

pub const ICON_CHOICES: [&str; 5] = ["Camera", "Film", "Heart", "Users", "Star"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Bookings,
    Services,
    Portfolio,
    Testimonials,
    Faqs,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Bookings,
        AdminTab::Services,
        AdminTab::Portfolio,
        AdminTab::Testimonials,
        AdminTab::Faqs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Bookings => "Bookings",
            AdminTab::Services => "Services",
            AdminTab::Portfolio => "Portfolio",
            AdminTab::Testimonials => "Testimonials",
            AdminTab::Faqs => "FAQs",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AdminTab::Bookings => "📅",
            AdminTab::Services => "▦",
            AdminTab::Portfolio => "🖼",
            AdminTab::Testimonials => "💬",
            AdminTab::Faqs => "?",
        }
    }
}

fn blank_service() -> NewService {
    NewService {
        icon_name: ICON_CHOICES[0].to_string(),
        ..NewService::default()
    }
}

fn render_bookings(bookings: &[Booking]) -> Html {
    html! {
        <div>
            <div class="tab-heading">
                <h2>{"Recent Bookings"}</h2>
                <span class="count-badge">{ format!("{} Total", bookings.len()) }</span>
            </div>
            <div class="table-wrap">
                <table class="bookings-table">
                    <thead>
                        <tr>
                            <th>{"Client"}</th>
                            <th>{"Event Date"}</th>
                            <th>{"Contact"}</th>
                            <th>{"Status"}</th>
                            <th>{"Message"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for bookings.iter().map(|booking| html! {
                            <tr key={booking.id}>
                                <td class="client">{ &booking.name }</td>
                                <td>{ if booking.date.is_empty() { "—" } else { booking.date.as_str() } }</td>
                                <td>
                                    <div class="contact-phone">{ &booking.phone }</div>
                                    <div class="contact-email">{ &booking.email }</div>
                                </td>
                                <td><span class="status-pill">{ booking.status.label() }</span></td>
                                <td class="message">{ &booking.message }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_portfolio(items: &[PortfolioItem]) -> Html {
    html! {
        <div>
            <div class="tab-heading">
                <h2>{"Portfolio Items"}</h2>
                <span class="count-badge">{ format!("{} Items", items.len()) }</span>
            </div>
            <div class="admin-portfolio-grid">
                { for items.iter().map(|item| html! {
                    <div key={item.id} class="admin-portfolio-tile">
                        <img src={item.thumbnail().to_string()} alt={item.title.clone()} />
                        <span class="kind-badge">{ if item.is_video() { "video" } else { "photo" } }</span>
                        <div class="tile-caption">
                            <p class="tile-title">{ &item.title }</p>
                            <p class="tile-category">{ &item.category }</p>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn coming_soon(tab: AdminTab) -> Html {
    html! {
        <div class="coming-soon">
            <p>{"Management for "}<strong>{ tab.label() }</strong>{" is coming soon."}</p>
        </div>
    }
}

#[function_component]
pub fn AdminDashboard() -> Html {
    let navigator = use_navigator();
    let studio = use_context::<StudioContext>();
    let active_tab = use_state(|| AdminTab::Bookings);
    let bookings = use_state(Vec::<Booking>::new);
    let services = use_state(Vec::<Service>::new);
    let portfolio = use_state(Vec::<PortfolioItem>::new);
    let error = use_state(|| None::<String>);
    let draft = use_state(blank_service);
    let show_form = use_state(|| false);

    {
        let navigator = navigator.clone();
        let bookings = bookings.clone();
        let services = services.clone();
        let portfolio = portfolio.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                if api::stored_token().is_none() {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::AdminLogin);
                    }
                } else {
                    spawn_local(async move {
                        let (b, s, p) = join!(
                            api::get_bookings(),
                            api::get_services(),
                            api::get_portfolio()
                        );
                        match b {
                            Ok(data) => bookings.set(data),
                            Err(ApiError::Unauthorized) => {
                                api::clear_token();
                                if let Some(navigator) = &navigator {
                                    navigator.push(&Route::AdminLogin);
                                }
                                return;
                            }
                            Err(e) => error.set(Some(format!("Failed to load bookings: {}", e))),
                        }
                        match s {
                            Ok(data) => services.set(data),
                            Err(e) => error.set(Some(format!("Failed to load services: {}", e))),
                        }
                        match p {
                            Ok(data) => portfolio.set(data),
                            Err(e) => error.set(Some(format!("Failed to load portfolio: {}", e))),
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let handle_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            api::clear_token();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::AdminLogin);
            }
        })
    };

    let reload_site = {
        let studio = studio.clone();
        move || {
            if let Some(studio) = &studio {
                studio.reload.emit(());
            }
        }
    };

    let add_service = {
        let draft = draft.clone();
        let services = services.clone();
        let error = error.clone();
        let show_form = show_form.clone();
        let reload_site = reload_site.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let new_service = (*draft).clone();
            let draft = draft.clone();
            let services = services.clone();
            let error = error.clone();
            let show_form = show_form.clone();
            let reload_site = reload_site.clone();
            spawn_local(async move {
                match api::add_service(new_service).await {
                    Ok(created) => {
                        let mut next = (*services).clone();
                        next.push(created);
                        services.set(next);
                        draft.set(blank_service());
                        show_form.set(false);
                        error.set(None);
                        reload_site();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let delete_service = {
        let services = services.clone();
        let error = error.clone();
        move |id: i64| {
            let services = services.clone();
            let error = error.clone();
            let reload_site = reload_site.clone();
            Callback::from(move |_: MouseEvent| {
                let services = services.clone();
                let error = error.clone();
                let reload_site = reload_site.clone();
                spawn_local(async move {
                    match api::delete_service(id).await {
                        Ok(()) => {
                            services.set(services.iter().filter(|s| s.id != id).cloned().collect());
                            reload_site();
                        }
                        Err(e) => error.set(Some(format!("Failed to delete service: {}", e))),
                    }
                });
            })
        }
    };

    let draft_input = |apply: fn(&mut NewService, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };
    let set_title = draft_input(|d, v| d.title = v);
    let set_description = draft_input(|d, v| d.description = v);
    let set_icon = draft_input(|d, v| d.icon_name = v);

    let services_tab = html! {
        <div>
            <div class="tab-heading">
                <h2>{"Services List"}</h2>
                <button
                    class="btn btn-primary btn-sm"
                    onclick={{
                        let show_form = show_form.clone();
                        Callback::from(move |_: MouseEvent| show_form.set(!*show_form))
                    }}
                >
                    { if *show_form { "Cancel" } else { "+ Add Service" } }
                </button>
            </div>
            if *show_form {
                <form class="service-form" onsubmit={add_service}>
                    <input
                        placeholder="Title"
                        value={draft.title.clone()}
                        oninput={Callback::from(move |e: InputEvent| {
                            set_title(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <textarea
                        placeholder="Description"
                        value={draft.description.clone()}
                        oninput={Callback::from(move |e: InputEvent| {
                            set_description(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                    <select
                        onchange={Callback::from(move |e: Event| {
                            set_icon(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        { for ICON_CHOICES.iter().map(|icon| html! {
                            <option value={*icon} selected={draft.icon_name == *icon}>{ *icon }</option>
                        }) }
                    </select>
                    <button type="submit" class="btn btn-primary btn-sm">{"Save"}</button>
                </form>
            }
            <div class="admin-services-grid">
                { for services.iter().map(|service| html! {
                    <div key={service.id} class="admin-service-card">
                        <div>
                            <h3>{ &service.title }</h3>
                            <p>{ &service.description }</p>
                            <span class="icon-tag">{ format!("Icon: {}", service.icon_name) }</span>
                        </div>
                        <button class="delete-button" onclick={delete_service(service.id)}>{"🗑"}</button>
                    </div>
                }) }
            </div>
        </div>
    };

    let tab = *active_tab;
    let content = match tab {
        AdminTab::Bookings => render_bookings(&bookings),
        AdminTab::Services => services_tab,
        AdminTab::Portfolio => render_portfolio(&portfolio),
        AdminTab::Testimonials | AdminTab::Faqs => coming_soon(tab),
    };

    html! {
        <div class="admin-dashboard">
            <aside class="admin-sidebar">
                <div class="admin-brand">{"DC Admin"}</div>
                <nav class="admin-tabs">
                    { for AdminTab::ALL.iter().map(|option| {
                        let option = *option;
                        let onclick = {
                            let active_tab = active_tab.clone();
                            Callback::from(move |_: MouseEvent| active_tab.set(option))
                        };
                        html! {
                            <button
                                key={option.label()}
                                class={classes!("admin-tab", (tab == option).then(|| "active"))}
                                {onclick}
                            >
                                <span class="tab-icon">{ option.icon() }</span>
                                <span>{ option.label() }</span>
                            </button>
                        }
                    }) }
                </nav>
                <button class="logout-button" onclick={handle_logout.clone()}>{"⎋ Logout"}</button>
            </aside>
            <main class="admin-main">
                <div class="admin-header">
                    <div>
                        <h1>{ tab.label() }</h1>
                        <p>{"Manage your website content"}</p>
                    </div>
                    <button class="btn btn-primary btn-sm mobile-only" onclick={handle_logout}>{"Logout"}</button>
                </div>
                if let Some(message) = (*error).as_ref() {
                    <div class="admin-error">{ message }</div>
                }
                <div class="admin-panel">{ content }</div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_listed_in_sidebar_order() {
        let labels: Vec<&str> = AdminTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Bookings", "Services", "Portfolio", "Testimonials", "FAQs"]);
    }

    #[test]
    fn icon_choices_cover_the_service_icons() {
        use crate::sections::services::ServiceIcon;
        for name in ICON_CHOICES {
            let icon = ServiceIcon::from_name(name);
            assert!(name == "Star" || icon != ServiceIcon::Star, "{}", name);
        }
    }
}
