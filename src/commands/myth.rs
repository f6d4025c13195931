use super::{ApiClient, Session, Transport};
use crate::error::ApiError;
use crate::models::Myth;

pub async fn get_myth<T: Transport, S: Session>(api: &ApiClient<T, S>) -> Result<Myth, ApiError> {
    api.get("/api/get_myth").await?.into_result()?.decode()
}
