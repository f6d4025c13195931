//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use super::form_fields::submitted_fields;
use crate::auth;
use crate::commands::browser_api;
use crate::platform::BrowserPlatform;
use crate::store::use_client_config;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let config = StoredValue::new(use_client_config());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = match submitted_fields(&ev) {
            Ok(fields) => fields,
            Err(err) => {
                log::error!("could not read registration form: {}", err);
                return;
            }
        };
        let config = config.get_value();
        spawn_local(async move {
            auth::register(&browser_api(&config), &BrowserPlatform, &fields, &config.routes).await;
        });
    };

    view! {
        <form id="registerForm" class="auth-form" on:submit=on_submit>
            <input name="name" type="text" placeholder="Full name" required />
            <input name="age" type="number" min="0" placeholder="Age" required />
            <select name="gender">
                <option value="Female">"Female"</option>
                <option value="Male">"Male"</option>
                <option value="Other">"Other"</option>
            </select>
            <input name="email" type="email" placeholder="Email" required />
            <input name="password" type="password" placeholder="Password" required />
            <button type="submit">"Register"</button>
        </form>
    }
}
