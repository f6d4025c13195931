//! Checklist Commands
//!
//! Frontend bindings for checklist item endpoints.

use serde::Serialize;

use super::{ApiClient, ApiResponse, Session, Transport};
use crate::error::ApiError;
use crate::models::{AddItemResponse, ChecklistItem, ItemId};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct NewItemArgs<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionArgs {
    is_completed: bool,
}

// ========================
// Commands
// ========================

/// Create an item; the server assigns its id
pub async fn add_checklist_item<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    content: &str,
) -> Result<ChecklistItem, ApiError> {
    let response = api.post("/add_checklist_item", &NewItemArgs { content }).await?;
    let created: AddItemResponse = response.into_result()?.decode()?;
    if let Some(message) = &created.message {
        log::debug!("{}", message);
    }
    Ok(created.item)
}

/// Returns the raw response; callers decide what a rejection means
pub async fn update_checklist_item<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    id: &ItemId,
    is_completed: bool,
) -> Result<ApiResponse, ApiError> {
    let path = format!("/update_checklist_item/{}", id.path_segment());
    api.post(&path, &CompletionArgs { is_completed }).await
}

pub async fn delete_checklist_item<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    id: &ItemId,
) -> Result<ApiResponse, ApiError> {
    let path = format!("/delete_checklist_item/{}", id.path_segment());
    api.post_empty(&path).await
}
