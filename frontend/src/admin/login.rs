use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::Route;

#[function_component]
pub fn AdminLogin() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api::login(username, password).await {
                    Ok(response) if response.success => {
                        if !api::store_token(&response.token) {
                            log::warn!("Could not persist admin token");
                        }
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::AdminDashboard);
                        }
                    }
                    Ok(_) | Err(ApiError::InvalidCredentials) => {
                        error.set(Some(ApiError::InvalidCredentials.to_string()));
                    }
                    Err(e) => {
                        log::error!("Login failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="admin-login">
            <div class="login-card">
                <h2>{"Admin Login"}</h2>
                if let Some(message) = (*error).as_ref() {
                    <div class="login-error">{ message }</div>
                }
                <form {onsubmit}>
                    <label>{"Username"}</label>
                    <input
                        type="text"
                        value={(*username).clone()}
                        oninput={{
                            let username = username.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                username.set(input.value());
                            })
                        }}
                    />
                    <label>{"Password"}</label>
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                password.set(input.value());
                            })
                        }}
                    />
                    <button type="submit" class="btn btn-primary btn-block">{"Login"}</button>
                </form>
                <p class="login-hint">{"Default: admin / password"}</p>
            </div>
        </div>
    }
}
