//! Myth card loader.

use crate::commands::{self, ApiClient, Session, Transport};
use crate::models::Myth;

pub const MYTH_FAILED_NOTICE: &str = "Failed to load myth.";

#[derive(Debug, Clone, PartialEq)]
pub enum MythState {
    Loading,
    Loaded(Myth),
    Failed,
}

/// Myth text as shown on the card front
pub fn quoted(myth: &Myth) -> String {
    format!("\"{}\"", myth.myth)
}

pub async fn load<T: Transport, S: Session>(api: &ApiClient<T, S>) -> MythState {
    match commands::get_myth(api).await {
        Ok(myth) => MythState::Loaded(myth),
        Err(err) => {
            log::error!("Error fetching myth: {}", err);
            MythState::Failed
        }
    }
}
