//! Chat Commands

use serde::Serialize;

use super::{ApiClient, Session, Transport};
use crate::error::ApiError;
use crate::models::ChatResponse;

#[derive(Serialize)]
struct ChatArgs<'a> {
    message: &'a str,
}

/// Send one user message and return the bot's reply
pub async fn send_chat<T: Transport, S: Session>(api: &ApiClient<T, S>, message: &str) -> Result<String, ApiError> {
    let response = api.post("/chat", &ChatArgs { message }).await?;
    let reply: ChatResponse = response.into_result()?.decode()?;
    Ok(reply.reply)
}
