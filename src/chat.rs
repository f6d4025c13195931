//! Chat flow.

use crate::commands::{self, ApiClient, Session, Transport};

/// Bot line shown when no usable reply came back
pub const CHAT_FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Trimmed message, or `None` if there is nothing to send
pub fn prepare_message(raw: &str) -> Option<String> {
    let message = raw.trim();
    (!message.is_empty()).then(|| message.to_string())
}

/// The bot's reply to `message`, falling back to [`CHAT_FAILURE_REPLY`]
pub async fn ask<T: Transport, S: Session>(api: &ApiClient<T, S>, message: &str) -> String {
    match commands::send_chat(api, message).await {
        Ok(reply) => reply,
        Err(err) => {
            log::error!("chat failed: {}", err);
            CHAT_FAILURE_REPLY.to_string()
        }
    }
}
