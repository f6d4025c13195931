//! UI Components
//!
//! Leptos components, one per page widget.

mod chat_panel;
mod checklist_panel;
mod form_fields;
mod login_form;
mod logout_button;
mod myth_card;
mod register_form;
mod symptom_panel;

pub use chat_panel::ChatPanel;
pub use checklist_panel::{read_rendered_items, ChecklistPanel};
pub use login_form::LoginForm;
pub use logout_button::LogoutButton;
pub use myth_card::MythCard;
pub use register_form::RegisterForm;
pub use symptom_panel::SymptomPanel;
