//! Auth Commands

use super::{ApiClient, ApiResponse, Session, Transport};
use crate::error::ApiError;
use crate::models::FormFields;

pub async fn register<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    fields: &FormFields,
) -> Result<ApiResponse, ApiError> {
    api.post("/register", fields).await
}

pub async fn login<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    fields: &FormFields,
) -> Result<ApiResponse, ApiError> {
    api.post("/login", fields).await
}

pub async fn logout<T: Transport, S: Session>(api: &ApiClient<T, S>) -> Result<ApiResponse, ApiError> {
    api.post_empty("/logout").await
}
