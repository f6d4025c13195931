//! CogniCare Frontend App
//!
//! The backend serves separate pages (login, register, dashboard). Each page
//! carries empty placeholder elements; every widget whose placeholder exists
//! is mounted into it and the rest are skipped.

use leptos::mount::mount_to;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::{
    read_rendered_items, ChatPanel, ChecklistPanel, LoginForm, LogoutButton, MythCard, RegisterForm, SymptomPanel,
};
use crate::config::ClientConfig;
use crate::store::{store_seed_checklist, AppState, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Widget {
    Register,
    Login,
    Logout,
    Chat,
    Myth,
    Checklist,
    Symptoms,
}

impl Widget {
    const ALL: [Widget; 7] = [
        Widget::Register,
        Widget::Login,
        Widget::Logout,
        Widget::Chat,
        Widget::Myth,
        Widget::Checklist,
        Widget::Symptoms,
    ];

    /// Id of the placeholder element the widget mounts into
    fn root_id(&self) -> &'static str {
        match self {
            Widget::Register => "register-root",
            Widget::Login => "login-root",
            Widget::Logout => "logout-root",
            Widget::Chat => "chat-root",
            Widget::Myth => "myth-root",
            Widget::Checklist => "checklist-root",
            Widget::Symptoms => "symptoms-root",
        }
    }

    fn render(self) -> AnyView {
        match self {
            Widget::Register => view! { <RegisterForm /> }.into_any(),
            Widget::Login => view! { <LoginForm /> }.into_any(),
            Widget::Logout => view! { <LogoutButton /> }.into_any(),
            Widget::Chat => view! { <ChatPanel /> }.into_any(),
            Widget::Myth => view! { <MythCard /> }.into_any(),
            Widget::Checklist => view! { <ChecklistPanel /> }.into_any(),
            Widget::Symptoms => view! { <SymptomPanel /> }.into_any(),
        }
    }
}

/// Mount every widget whose placeholder is on the current page
pub fn mount_widgets(config: ClientConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document to mount into");
        return;
    };

    let store: AppStore = Store::new(AppState::default());

    for widget in Widget::ALL {
        let Some(root) = placeholder(&document, widget) else { continue };

        if widget == Widget::Checklist {
            // Take over the items the server rendered into the placeholder
            let existing = read_rendered_items(&root);
            log::info!("loaded {} rendered checklist items", existing.len());
            store_seed_checklist(&store, existing);
            root.set_inner_html("");
        }

        let config = config.clone();
        let handle = mount_to(root, move || {
            provide_context(store);
            provide_context(config);
            widget.render()
        });
        handle.forget();
        log::debug!("mounted {:?}", widget);
    }
}

fn placeholder(document: &Document, widget: Widget) -> Option<HtmlElement> {
    document
        .get_element_by_id(widget.root_id())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}
