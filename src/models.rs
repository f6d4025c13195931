//! Frontend Models
//!
//! Data structures matching backend payloads.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Server-assigned checklist item identifier.
///
/// The backend hands out integers, but the client treats the value as opaque
/// text so it can round-trip through `data-id` attributes unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawItemId")]
pub struct ItemId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Number(i64),
    Text(String),
}

impl From<RawItemId> for ItemId {
    fn from(raw: RawItemId) -> Self {
        match raw {
            RawItemId::Number(n) => Self(n.to_string()),
            RawItemId::Text(s) => Self(s),
        }
    }
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id encoded for use as a single URL path segment
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, NON_ALPHANUMERIC).to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checklist item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(rename = "item_id")]
    pub id: ItemId,
    pub content: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, content: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id: ItemId::new(id),
            content: content.into(),
            is_completed,
        }
    }
}

/// Body of a successful `/add_checklist_item` response
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub item: ChecklistItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Daily health myth with its debunking fact
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Myth {
    pub myth: String,
    pub fact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { author: Author::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { author: Author::Bot, text: text.into() }
    }

    /// CSS class used by the chat history
    pub fn class(&self) -> &'static str {
        match self.author {
            Author::User => "user-message",
            Author::Bot => "bot-message",
        }
    }
}

/// Form fields collected as a flat name -> value object
pub type FormFields = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    /// Parse a form label; anything unrecognized is `Moderate`
    pub fn from_label(label: &str) -> Self {
        match label {
            "Mild" => Severity::Mild,
            "Severe" => Severity::Severe,
            _ => Severity::Moderate,
        }
    }
}

/// Symptom log entry sent to `/log_symptom`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomEntry {
    pub symptom: String,
    pub log_date: String,
    pub severity: Severity,
    pub notes: String,
}

/// Calendar event returned by `/get_symptoms`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "extendedProps", default)]
    pub extended_props: EventDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventDetails {
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendAnalysis {
    pub analysis: String,
}
