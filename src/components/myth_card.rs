//! Myth Card Component
//!
//! Loads today's myth once on mount; clicking flips the card to the fact.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::browser_api;
use crate::myth::{self, MythState, MYTH_FAILED_NOTICE};
use crate::store::use_client_config;

#[component]
pub fn MythCard() -> impl IntoView {
    let config = StoredValue::new(use_client_config());
    let (state, set_state) = signal(MythState::Loading);
    let (flipped, set_flipped) = signal(false);

    Effect::new(move |_| {
        let config = config.get_value();
        spawn_local(async move {
            set_state.set(myth::load(&browser_api(&config)).await);
        });
    });

    view! {
        <div
            id="myth-card"
            class="myth-card"
            class:is-flipped=move || flipped.get()
            on:click=move |_| set_flipped.update(|f| *f = !*f)
        >
            {move || match state.get() {
                MythState::Loading => view! {
                    <div id="myth-loading" class="myth-loading">"Loading today's myth..."</div>
                }.into_any(),
                MythState::Failed => view! {
                    <div id="myth-loading" class="myth-loading"><p>{MYTH_FAILED_NOTICE}</p></div>
                }.into_any(),
                MythState::Loaded(loaded) => view! {
                    <div class="myth-card-inner">
                        <div class="myth-card-front">
                            <p id="myth-content">{myth::quoted(&loaded)}</p>
                            <p id="myth-hint" class="myth-hint">"Tap to reveal the fact"</p>
                        </div>
                        <div class="myth-card-back">
                            <p id="fact-content">{loaded.fact.clone()}</p>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
