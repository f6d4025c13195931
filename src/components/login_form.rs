//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use super::form_fields::submitted_fields;
use crate::auth;
use crate::commands::browser_api;
use crate::platform::BrowserPlatform;
use crate::store::use_client_config;

#[component]
pub fn LoginForm() -> impl IntoView {
    let config = StoredValue::new(use_client_config());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = match submitted_fields(&ev) {
            Ok(fields) => fields,
            Err(err) => {
                log::error!("could not read login form: {}", err);
                return;
            }
        };
        let config = config.get_value();
        spawn_local(async move {
            auth::login(&browser_api(&config), &BrowserPlatform, &fields, &config.routes).await;
        });
    };

    view! {
        <form id="loginForm" class="auth-form" on:submit=on_submit>
            <input name="email" type="email" placeholder="Email" required />
            <input name="password" type="password" placeholder="Password" required />
            <button type="submit">"Log in"</button>
        </form>
    }
}
