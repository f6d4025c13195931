//! Checklist Client
//!
//! Add, toggle and delete checklist items against the backend and mirror the
//! result into a [`ChecklistView`].
//!
//! DOM events never reach this module directly. The component layer reduces
//! each one to a [`ChecklistEvent`] (for clicks, via a [`ClickSnapshot`] and
//! [`classify_click`]) and hands it to [`Checklist::dispatch`].
//!
//! The backend is the source of truth; the view is a best-effort mirror. An
//! item is only ever appended with the id the server returned for it.

use serde::Deserialize;

use crate::commands::{self, ApiClient, Session, Transport};
use crate::config::DEFAULT_DELETE_PROMPT;
use crate::error::ApiError;
use crate::models::{ChecklistItem, ItemId};
use crate::platform::Dialogs;

/// Shown when an add fails without a server message to relay
pub const ADD_FAILED_NOTICE: &str = "An error occurred. Please try again.";

/// When toggle and delete touch the view relative to their request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePolicy {
    /// Toggle applies before the request resolves; delete removes once the
    /// request returns at all. Rejections are logged, never rolled back.
    #[default]
    Optimistic,
    /// Both wait for a 2xx response. A failed toggle restores the previous
    /// state; a failed delete keeps the entry.
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistEvent {
    Submit { content: String },
    Toggle { id: ItemId, completed: bool },
    Delete { id: ItemId },
}

/// What kind of element a click inside the list landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickedElement {
    Checkbox { checked: bool },
    Button,
    Other,
}

/// The fields of a list click the handlers care about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickSnapshot {
    pub element: ClickedElement,
    /// `data-id` of the enclosing list entry, if the click was inside one
    pub entry_id: Option<ItemId>,
}

/// Map a click on the list container to a checklist event
pub fn classify_click(snapshot: ClickSnapshot) -> Option<ChecklistEvent> {
    let id = snapshot.entry_id?;
    match snapshot.element {
        ClickedElement::Checkbox { checked } => Some(ChecklistEvent::Toggle { id, completed: checked }),
        ClickedElement::Button => Some(ChecklistEvent::Delete { id }),
        ClickedElement::Other => None,
    }
}

/// Rendered list the handlers write to
pub trait ChecklistView {
    /// Add an entry at the end of the list
    fn append(&self, item: ChecklistItem);
    fn set_completed(&self, id: &ItemId, completed: bool);
    fn remove(&self, id: &ItemId);
    fn clear_input(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing sent: empty input, declined prompt, or a click outside an item
    Skipped,
    /// The backend accepted the change
    Committed,
    /// The exchange failed; see the log or the alert shown
    Failed,
}

pub struct Checklist<T, S, V, D> {
    api: ApiClient<T, S>,
    view: V,
    dialogs: D,
    policy: UpdatePolicy,
    delete_prompt: String,
}

impl<T, S, V, D> Checklist<T, S, V, D>
where
    T: Transport,
    S: Session,
    V: ChecklistView,
    D: Dialogs,
{
    pub fn new(api: ApiClient<T, S>, view: V, dialogs: D) -> Self {
        Self {
            api,
            view,
            dialogs,
            policy: UpdatePolicy::default(),
            delete_prompt: DEFAULT_DELETE_PROMPT.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: UpdatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_delete_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.delete_prompt = prompt.into();
        self
    }

    pub async fn dispatch(&self, event: ChecklistEvent) -> Outcome {
        match event {
            ChecklistEvent::Submit { content } => self.add_item(&content).await,
            ChecklistEvent::Toggle { id, completed } => self.toggle(id, completed).await,
            ChecklistEvent::Delete { id } => self.delete(id).await,
        }
    }

    pub async fn add_item(&self, raw: &str) -> Outcome {
        let content = raw.trim();
        if content.is_empty() {
            return Outcome::Skipped;
        }

        match commands::add_checklist_item(&self.api, content).await {
            Ok(item) => {
                log::info!("added item {}", item.id);
                self.view.append(item);
                self.view.clear_input();
                Outcome::Committed
            }
            Err(ApiError::Rejected { message, .. }) => {
                self.dialogs.alert(&format!("Error: {}", message));
                Outcome::Failed
            }
            Err(err) => {
                log::error!("Error adding item: {}", err);
                self.dialogs.alert(ADD_FAILED_NOTICE);
                Outcome::Failed
            }
        }
    }

    pub async fn toggle(&self, id: ItemId, completed: bool) -> Outcome {
        if self.policy == UpdatePolicy::Optimistic {
            self.view.set_completed(&id, completed);
        }

        let result = commands::update_checklist_item(&self.api, &id, completed)
            .await
            .and_then(|response| response.into_result());

        match (result, self.policy) {
            (Ok(_), UpdatePolicy::Optimistic) => Outcome::Committed,
            (Ok(_), UpdatePolicy::Confirmed) => {
                self.view.set_completed(&id, completed);
                Outcome::Committed
            }
            (Err(err), policy) => {
                log::error!("Error updating item {}: {}", id, err);
                if policy == UpdatePolicy::Confirmed {
                    self.view.set_completed(&id, !completed);
                }
                Outcome::Failed
            }
        }
    }

    pub async fn delete(&self, id: ItemId) -> Outcome {
        if !self.dialogs.confirm(&self.delete_prompt) {
            return Outcome::Skipped;
        }

        let response = match commands::delete_checklist_item(&self.api, &id).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Error deleting item {}: {}", id, err);
                return Outcome::Failed;
            }
        };

        match response.into_result() {
            Ok(_) => {
                self.view.remove(&id);
                Outcome::Committed
            }
            Err(err) => {
                log::warn!("delete of item {} rejected: {}", id, err);
                if self.policy == UpdatePolicy::Optimistic {
                    self.view.remove(&id);
                }
                Outcome::Failed
            }
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use std::pin::pin;

    use futures::executor::block_on;
    use futures::poll;
    use serde_json::json;

    use super::*;
    use crate::commands::{ApiResponse, CookieSession};
    use crate::testing::{api_with, FakePlatform, FakeTransport, ListView};

    type TestChecklist = Checklist<FakeTransport, CookieSession, ListView, FakePlatform>;

    fn checklist(transport: &FakeTransport, view: &ListView, platform: &FakePlatform) -> TestChecklist {
        Checklist::new(api_with(transport), view.clone(), platform.clone())
    }

    fn seeded() -> ListView {
        ListView::with_items(vec![
            ChecklistItem::new("1", "Drink water", false),
            ChecklistItem::new("2", "Stretch", true),
        ])
    }

    fn ok() -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse::new(200, json!({"message": "ok"})))
    }

    #[test]
    fn test_classify_click() {
        let id = ItemId::new("5");
        let checkbox = ClickSnapshot {
            element: ClickedElement::Checkbox { checked: true },
            entry_id: Some(id.clone()),
        };
        let button = ClickSnapshot { element: ClickedElement::Button, entry_id: Some(id.clone()) };
        let text = ClickSnapshot { element: ClickedElement::Other, entry_id: Some(id.clone()) };
        let outside = ClickSnapshot { element: ClickedElement::Button, entry_id: None };

        assert_eq!(classify_click(checkbox), Some(ChecklistEvent::Toggle { id: id.clone(), completed: true }));
        assert_eq!(classify_click(button), Some(ChecklistEvent::Delete { id }));
        assert_eq!(classify_click(text), None);
        assert_eq!(classify_click(outside), None);
    }

    #[test]
    fn test_blank_content_is_skipped() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        let list = checklist(&transport, &view, &platform);

        assert_eq!(block_on(list.add_item("")), Outcome::Skipped);
        assert_eq!(block_on(list.add_item("   \t")), Outcome::Skipped);

        assert!(transport.requests().is_empty());
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.input_cleared(), 0);
    }

    #[test]
    fn test_add_appends_server_item() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.respond(201, json!({"item": {"item_id": "7", "content": "Buy milk", "is_completed": false}}));
        let list = checklist(&transport, &view, &platform);

        let outcome = block_on(list.dispatch(ChecklistEvent::Submit { content: "  Buy milk ".to_string() }));

        assert_eq!(outcome, Outcome::Committed);
        let items = view.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], ChecklistItem::new("7", "Buy milk", false));
        assert_eq!(view.input_cleared(), 1);
        assert_eq!(transport.requests()[0].body, Some(json!({"content": "Buy milk"})));
    }

    #[test]
    fn test_add_keeps_completed_flag_from_server() {
        let (transport, view, platform) = (FakeTransport::default(), ListView::default(), FakePlatform::default());
        transport.respond(201, json!({"item": {"item_id": 9, "content": "Done already", "is_completed": true}}));

        block_on(checklist(&transport, &view, &platform).add_item("Done already"));

        assert_eq!(view.completed("9"), Some(true));
    }

    #[test]
    fn test_add_rejection_alerts_message() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.respond(400, json!({"message": "Invalid"}));

        let outcome = block_on(checklist(&transport, &view, &platform).add_item("x"));

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.input_cleared(), 0);
        let alerts = platform.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("Invalid"));
    }

    #[test]
    fn test_add_transport_failure_alerts_generic_notice() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.fail("offline");

        block_on(checklist(&transport, &view, &platform).add_item("x"));

        assert_eq!(view.items().len(), 2);
        assert_eq!(platform.alerts(), vec![ADD_FAILED_NOTICE.to_string()]);
    }

    #[test]
    fn test_add_error_page_alerts_generic_notice() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.respond(500, json!("<html>Internal Server Error</html>"));

        let outcome = block_on(checklist(&transport, &view, &platform).add_item("x"));

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(view.items().len(), 2);
        assert_eq!(platform.alerts(), vec![ADD_FAILED_NOTICE.to_string()]);
    }

    #[test]
    fn test_toggle_applies_before_response() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        let gate = transport.gate();
        let list = checklist(&transport, &view, &platform);

        block_on(async {
            let mut pending = pin!(list.toggle(ItemId::new("1"), true));
            assert!(poll!(pending.as_mut()).is_pending());
            assert_eq!(view.completed("1"), Some(true));

            gate.send(ok()).unwrap();
            assert_eq!(pending.await, Outcome::Committed);
        });

        assert_eq!(transport.requests()[0].body, Some(json!({"is_completed": true})));
    }

    #[test]
    fn test_toggle_failure_is_not_rolled_back() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.fail("offline");
        transport.respond(404, json!({"message": "Item not found."}));
        let list = checklist(&transport, &view, &platform);

        assert_eq!(block_on(list.toggle(ItemId::new("2"), false)), Outcome::Failed);
        assert_eq!(view.completed("2"), Some(false));

        assert_eq!(block_on(list.toggle(ItemId::new("1"), true)), Outcome::Failed);
        assert_eq!(view.completed("1"), Some(true));
        assert!(platform.alerts().is_empty());
    }

    #[test]
    fn test_rapid_toggles_touch_only_their_own_entry() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        let first_gate = transport.gate();
        let second_gate = transport.gate();
        let list = checklist(&transport, &view, &platform);

        block_on(async {
            let mut first = pin!(list.toggle(ItemId::new("1"), true));
            let mut second = pin!(list.toggle(ItemId::new("2"), false));
            assert!(poll!(first.as_mut()).is_pending());
            assert_eq!(view.completed("1"), Some(true));
            assert_eq!(view.completed("2"), Some(true));

            assert!(poll!(second.as_mut()).is_pending());
            assert_eq!(view.completed("1"), Some(true));
            assert_eq!(view.completed("2"), Some(false));

            // Responses arrive out of order
            second_gate.send(ok()).unwrap();
            assert_eq!(second.await, Outcome::Committed);
            first_gate.send(ok()).unwrap();
            assert_eq!(first.await, Outcome::Committed);
        });

        assert_eq!(view.completed("1"), Some(true));
        assert_eq!(view.completed("2"), Some(false));
    }

    #[test]
    fn test_confirmed_delete_removes_entry() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.respond(200, json!({"message": "Item deleted!"}));
        let list = checklist(&transport, &view, &platform);

        let outcome = block_on(list.dispatch(ChecklistEvent::Delete { id: ItemId::new("1") }));

        assert_eq!(outcome, Outcome::Committed);
        assert_eq!(view.items(), vec![ChecklistItem::new("2", "Stretch", true)]);
        assert_eq!(platform.prompts(), vec![DEFAULT_DELETE_PROMPT.to_string()]);
        assert_eq!(transport.requests()[0].path, "/delete_checklist_item/1");
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::declining());

        let outcome = block_on(checklist(&transport, &view, &platform).delete(ItemId::new("1")));

        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(view.items().len(), 2);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_delete_transport_failure_keeps_entry() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.fail("offline");

        let outcome = block_on(checklist(&transport, &view, &platform).delete(ItemId::new("1")));

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(view.items().len(), 2);
        assert!(platform.alerts().is_empty());
    }

    #[test]
    fn test_optimistic_delete_ignores_rejection() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.respond(404, json!({"message": "Item not found."}));

        block_on(checklist(&transport, &view, &platform).delete(ItemId::new("2")));

        assert_eq!(view.items().len(), 1);
    }

    #[test]
    fn test_confirmed_policy_restores_rejected_toggle() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        let gate = transport.gate();
        let list = checklist(&transport, &view, &platform).with_policy(UpdatePolicy::Confirmed);

        block_on(async {
            let mut pending = pin!(list.toggle(ItemId::new("1"), true));
            assert!(poll!(pending.as_mut()).is_pending());
            assert_eq!(view.completed("1"), Some(false));

            gate.send(Ok(ApiResponse::new(404, json!({"message": "Item not found."})))).unwrap();
            assert_eq!(pending.await, Outcome::Failed);
        });

        assert_eq!(view.completed("1"), Some(false));
    }

    #[test]
    fn test_confirmed_policy_applies_after_success() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.respond(200, json!({"message": "Item updated!"}));
        let list = checklist(&transport, &view, &platform).with_policy(UpdatePolicy::Confirmed);

        assert_eq!(block_on(list.toggle(ItemId::new("2"), false)), Outcome::Committed);
        assert_eq!(list.view().completed("2"), Some(false));
    }

    #[test]
    fn test_confirmed_policy_keeps_rejected_delete() {
        let (transport, view, platform) = (FakeTransport::default(), seeded(), FakePlatform::default());
        transport.respond(404, json!({"message": "Item not found."}));
        let list = checklist(&transport, &view, &platform)
            .with_policy(UpdatePolicy::Confirmed)
            .with_delete_prompt("Remove it?");

        assert_eq!(block_on(list.delete(ItemId::new("2"))), Outcome::Failed);
        assert_eq!(view.items().len(), 2);
        assert_eq!(platform.prompts(), vec!["Remove it?".to_string()]);
    }
}
