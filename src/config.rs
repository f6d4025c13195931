//! Client Configuration
//!
//! Read once at startup from a JSON block embedded in the page:
//!
//! ```html
//! <script id="client-config" type="application/json">
//!   {"update_policy": "confirmed", "log_level": "debug"}
//! </script>
//! ```
//!
//! Every field is optional.

use log::Level;
use serde::Deserialize;

use crate::checklist::UpdatePolicy;
use crate::error::ConfigError;

/// Id of the `<script>` element holding the configuration
pub const CONFIG_ELEMENT_ID: &str = "client-config";

pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Extra header attached to every request (e.g. a CSRF token)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeaderPair {
    pub name: String,
    pub value: String,
}

/// Redirect targets after auth actions
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Routes {
    pub after_register: String,
    pub after_login: String,
    pub after_logout: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            after_register: "/".to_string(),
            after_login: "/dashboard.html".to_string(),
            after_logout: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every backend path; empty means same origin
    pub api_base: String,
    pub update_policy: UpdatePolicy,
    pub log_level: String,
    pub csrf_header: Option<HeaderPair>,
    pub routes: Routes,
    pub delete_prompt: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            update_policy: UpdatePolicy::default(),
            log_level: "info".to_string(),
            csrf_header: None,
            routes: Routes::default(),
            delete_prompt: DEFAULT_DELETE_PROMPT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from the page. A missing element yields the defaults.
    pub fn from_page() -> Result<Self, ConfigError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID));

        match element {
            None => Ok(Self::default()),
            Some(el) => {
                let raw = el.text_content().unwrap_or_default();
                if raw.trim().is_empty() {
                    return Err(ConfigError::Empty);
                }
                Self::from_json(&raw)
            }
        }
    }

    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::Info)
    }
}
