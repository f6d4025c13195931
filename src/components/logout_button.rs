use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth;
use crate::commands::browser_api;
use crate::platform::BrowserPlatform;
use crate::store::use_client_config;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let config = StoredValue::new(use_client_config());

    view! {
        <button id="logoutButton" class="logout-btn" on:click=move |_| {
            let config = config.get_value();
            spawn_local(async move {
                auth::logout(&browser_api(&config), &BrowserPlatform, &config.routes).await;
            });
        }>
            "Log out"
        </button>
    }
}
