//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::checklist::ChecklistView;
use crate::config::ClientConfig;
use crate::models::{CalendarEvent, ChatMessage, ChecklistItem, ItemId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Checklist entries in display order
    pub checklist: Vec<ChecklistItem>,
    /// Text of the add-item input
    pub checklist_input: String,
    /// Chat history, oldest first
    pub chat: Vec<ChatMessage>,
    /// Symptom events for the displayed month
    pub symptom_events: Vec<CalendarEvent>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Get the client configuration from context
pub fn use_client_config() -> ClientConfig {
    expect_context::<ClientConfig>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_checklist(store: &AppStore) -> Vec<ChecklistItem> {
    store.checklist().get()
}

/// Replace the list, e.g. with items rendered by the server
pub fn store_seed_checklist(store: &AppStore, items: Vec<ChecklistItem>) {
    store.checklist().set(items);
}

pub fn store_item_completed(store: &AppStore, id: &ItemId) -> bool {
    store
        .checklist()
        .read()
        .iter()
        .find(|item| &item.id == id)
        .map(|item| item.is_completed)
        .unwrap_or(false)
}

pub fn store_checklist_input(store: &AppStore) -> String {
    store.checklist_input().get()
}

pub fn store_set_checklist_input(store: &AppStore, value: String) {
    store.checklist_input().set(value);
}

pub fn store_chat(store: &AppStore) -> Vec<ChatMessage> {
    store.chat().get()
}

pub fn store_push_chat(store: &AppStore, message: ChatMessage) {
    store.chat().write().push(message);
}

pub fn store_symptom_events(store: &AppStore) -> Vec<CalendarEvent> {
    store.symptom_events().get()
}

pub fn store_set_symptom_events(store: &AppStore, events: Vec<CalendarEvent>) {
    store.symptom_events().set(events);
}

/// [`ChecklistView`] backed by the store; the list component renders from it
#[derive(Clone, Copy)]
pub struct StoreChecklistView {
    store: AppStore,
}

impl StoreChecklistView {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl ChecklistView for StoreChecklistView {
    fn append(&self, item: ChecklistItem) {
        self.store.checklist().write().push(item);
    }

    fn set_completed(&self, id: &ItemId, completed: bool) {
        if let Some(item) = self.store.checklist().write().iter_mut().find(|item| &item.id == id) {
            item.is_completed = completed;
        }
    }

    fn remove(&self, id: &ItemId) {
        self.store.checklist().write().retain(|item| &item.id != id);
    }

    fn clear_input(&self) {
        self.store.checklist_input().set(String::new());
    }
}
