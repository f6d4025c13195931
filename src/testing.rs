//! Test doubles for the injected capabilities.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use serde_json::Value;

use crate::checklist::ChecklistView;
use crate::commands::{ApiClient, ApiRequest, ApiResponse, CookieSession, Transport};
use crate::error::ApiError;
use crate::models::{ChecklistItem, ItemId};
use crate::platform::{Dialogs, Navigator};

type Reply = Result<ApiResponse, ApiError>;

enum Queued {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

#[derive(Default)]
struct TransportState {
    replies: VecDeque<Queued>,
    requests: Vec<ApiRequest>,
}

/// Replays queued replies in order and records every request
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<RefCell<TransportState>>,
}

impl FakeTransport {
    pub fn respond(&self, status: u16, body: Value) {
        self.push(Queued::Ready(Ok(ApiResponse::new(status, body))));
    }

    pub fn fail(&self, reason: &str) {
        self.push(Queued::Ready(Err(ApiError::Transport(reason.to_string()))));
    }

    /// Queue a reply that stays pending until the returned sender fires
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(Queued::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    fn push(&self, queued: Queued) {
        self.state.borrow_mut().replies.push_back(queued);
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let next = {
            let mut state = self.state.borrow_mut();
            state.requests.push(request);
            state.replies.pop_front()
        };
        match next {
            Some(Queued::Ready(reply)) => reply,
            Some(Queued::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string()))),
            None => Err(ApiError::Transport("no reply queued".to_string())),
        }
    }
}

pub fn api_with(transport: &FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(transport.clone(), CookieSession::default())
}

#[derive(Default)]
struct PlatformState {
    alerts: Vec<String>,
    prompts: Vec<String>,
    redirects: Vec<String>,
    declines: bool,
}

/// Records dialogs and redirects; confirms by default
#[derive(Clone, Default)]
pub struct FakePlatform {
    state: Rc<RefCell<PlatformState>>,
}

impl FakePlatform {
    pub fn declining() -> Self {
        let platform = Self::default();
        platform.state.borrow_mut().declines = true;
        platform
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.state.borrow().prompts.clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.state.borrow().redirects.clone()
    }
}

impl Dialogs for FakePlatform {
    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.prompts.push(message.to_string());
        !state.declines
    }
}

impl Navigator for FakePlatform {
    fn redirect(&self, path: &str) {
        self.state.borrow_mut().redirects.push(path.to_string());
    }
}

#[derive(Default)]
struct ListState {
    items: Vec<ChecklistItem>,
    input_cleared: usize,
}

/// In-memory stand-in for the rendered list
#[derive(Clone, Default)]
pub struct ListView {
    state: Rc<RefCell<ListState>>,
}

impl ListView {
    pub fn with_items(items: Vec<ChecklistItem>) -> Self {
        let view = Self::default();
        view.state.borrow_mut().items = items;
        view
    }

    pub fn items(&self) -> Vec<ChecklistItem> {
        self.state.borrow().items.clone()
    }

    pub fn completed(&self, id: &str) -> Option<bool> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.id.as_str() == id)
            .map(|item| item.is_completed)
    }

    pub fn input_cleared(&self) -> usize {
        self.state.borrow().input_cleared
    }
}

impl ChecklistView for ListView {
    fn append(&self, item: ChecklistItem) {
        self.state.borrow_mut().items.push(item);
    }

    fn set_completed(&self, id: &ItemId, completed: bool) {
        if let Some(item) = self.state.borrow_mut().items.iter_mut().find(|item| &item.id == id) {
            item.is_completed = completed;
        }
    }

    fn remove(&self, id: &ItemId) {
        self.state.borrow_mut().items.retain(|item| &item.id != id);
    }

    fn clear_input(&self) {
        self.state.borrow_mut().input_cleared += 1;
    }
}
