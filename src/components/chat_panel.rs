//! Chat Panel Component
//!
//! User messages appear immediately; the bot's reply (or a failure notice)
//! is appended when the backend answers.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::chat;
use crate::commands::browser_api;
use crate::markdown::render_reply;
use crate::models::{Author, ChatMessage};
use crate::store::{store_chat, store_push_chat, use_app_store, use_client_config};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let store = use_app_store();
    let config = StoredValue::new(use_client_config());
    let (draft, set_draft) = signal(String::new());
    let history = NodeRef::<html::Div>::new();

    let scroll_to_bottom = move || {
        spawn_local(async move {
            // Let the appended message render first
            TimeoutFuture::new(0).await;
            if let Some(el) = history.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(message) = chat::prepare_message(&draft.get_untracked()) else { return };

        store_push_chat(&store, ChatMessage::user(message.clone()));
        set_draft.set(String::new());
        scroll_to_bottom();

        let config = config.get_value();
        spawn_local(async move {
            let reply = chat::ask(&browser_api(&config), &message).await;
            store_push_chat(&store, ChatMessage::bot(reply));
            scroll_to_bottom();
        });
    };

    view! {
        <div id="chat-history" class="chat-history" node_ref=history>
            <For
                each=move || store_chat(&store).into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, message)| {
                    let class = message.class();
                    match message.author {
                        Author::User => view! { <div class=class>{message.text}</div> }.into_any(),
                        Author::Bot => view! {
                            <div class=class inner_html=render_reply(&message.text)></div>
                        }.into_any(),
                    }
                }
            />
        </div>

        <form id="chat-form" class="chat-form" on:submit=on_submit>
            <input
                id="message-input"
                type="text"
                placeholder="Ask a health question..."
                autocomplete="off"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Send"</button>
        </form>
    }
}
