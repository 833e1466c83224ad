use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::components::date_picker::DatePicker;
use crate::components::section::{Section, SectionHeader};
use crate::config;
use crate::models::NewBooking;

pub const THANK_YOU: &str =
    "Thank you! Your booking request has been sent. We will contact you shortly.";
pub const SUBMIT_FAILED: &str =
    "Something went wrong. Please try again or contact us on WhatsApp.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub phone: bool,
    pub email: bool,
}

impl FieldErrors {
    pub fn check(form: &NewBooking) -> Self {
        Self {
            name: form.name.trim().is_empty(),
            phone: form.phone.trim().is_empty(),
            email: form.email.trim().is_empty(),
        }
    }

    pub fn any(self) -> bool {
        self.name || self.phone || self.email
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn required_hint(missing: bool) -> Html {
    if missing {
        html! { <span class="field-error">{"Required"}</span> }
    } else {
        html! {}
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(NewBooking::default);
    let event_date = use_state(|| None::<NaiveDate>);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);

    let text_input = |apply: fn(&mut NewBooking, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_name = text_input(|f, v| f.name = v);
    let on_phone = text_input(|f, v| f.phone = v);
    let on_email = text_input(|f, v| f.email = v);

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_date = {
        let event_date = event_date.clone();
        Callback::from(move |date: NaiveDate| event_date.set(Some(date)))
    };

    let onsubmit = {
        let form = form.clone();
        let event_date = event_date.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let mut booking = (*form).clone();
            booking.date = event_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();

            let found = FieldErrors::check(&booking);
            errors.set(found);
            if found.any() {
                return;
            }

            submitting.set(true);
            let form = form.clone();
            let event_date = event_date.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match api::submit_booking(booking).await {
                    Ok(()) => {
                        alert(THANK_YOU);
                        form.set(NewBooking::default());
                        event_date.set(None);
                    }
                    Err(e) => {
                        log::error!("Booking submission failed: {}", e);
                        alert(SUBMIT_FAILED);
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <Section id="contact" dark=true class="contact-section">
            <SectionHeader title="Let's Create Magic Together" subtitle="Get in Touch" dark=true />
            <div class="contact-grid">
                <div class="contact-info">
                    <h3>{"Visit Our Studio"}</h3>
                    <p class="contact-lede">
                        {"We'd love to meet you over a cup of coffee and discuss your dream wedding."}
                    </p>
                    <div class="contact-item">
                        <div class="contact-icon">{"☎"}</div>
                        <div>
                            <h4>{"Phone"}</h4>
                            <a href={config::STUDIO_PHONE_LINK}>{ config::STUDIO_PHONE_DISPLAY }</a>
                        </div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-icon">{"⌖"}</div>
                        <div>
                            <h4>{"Studio Address"}</h4>
                            <p>{ config::STUDIO_ADDRESS[0] }<br />{ config::STUDIO_ADDRESS[1] }</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-icon">{"✉"}</div>
                        <div>
                            <h4>{"Email Us"}</h4>
                            <a href={format!("mailto:{}", config::STUDIO_EMAIL)}>{ config::STUDIO_EMAIL }</a>
                        </div>
                    </div>
                    <div class="contact-social">
                        <h4>{"Follow Our Journey"}</h4>
                        <div class="social-links">
                            <a href="#">{"IG"}</a>
                            <a href="#">{"FB"}</a>
                            <a href="#">{"YT"}</a>
                        </div>
                    </div>
                </div>
                <form class="contact-form" {onsubmit} novalidate=true>
                    <div class="form-row">
                        <div class="form-field">
                            <label>{"Name"}</label>
                            <input value={form.name.clone()} oninput={on_name} placeholder="Your Name" />
                            { required_hint(errors.name) }
                        </div>
                        <div class="form-field">
                            <label>{"Phone"}</label>
                            <input value={form.phone.clone()} oninput={on_phone} placeholder="Your Number" />
                            { required_hint(errors.phone) }
                        </div>
                    </div>
                    <div class="form-field">
                        <label>{"Email"}</label>
                        <input type="email" value={form.email.clone()} oninput={on_email} placeholder="Your Email" />
                        { required_hint(errors.email) }
                    </div>
                    <div class="form-field">
                        <label>{"Event Date"}</label>
                        <DatePicker value={*event_date} on_change={on_date} />
                    </div>
                    <div class="form-field">
                        <label>{"Message"}</label>
                        <textarea
                            rows="3"
                            value={form.message.clone()}
                            oninput={on_message}
                            placeholder="Tell us about your event..."
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                        { if *submitting { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_each_missing_field() {
        let errors = FieldErrors::check(&NewBooking::default());
        assert!(errors.name && errors.phone && errors.email);

        let form = NewBooking {
            name: "Meera".to_string(),
            phone: "  ".to_string(),
            email: "meera@example.com".to_string(),
            ..NewBooking::default()
        };
        let errors = FieldErrors::check(&form);
        assert_eq!(errors, FieldErrors { name: false, phone: true, email: false });
        assert!(errors.any());
    }

    #[test]
    fn date_and_message_are_optional() {
        let form = NewBooking {
            name: "Meera".to_string(),
            phone: "9810000000".to_string(),
            email: "meera@example.com".to_string(),
            ..NewBooking::default()
        };
        assert!(!FieldErrors::check(&form).any());
        assert!(api::validate_booking(&form).is_ok());
    }
}
