//! Symptom Log Commands
//!
//! Frontend bindings for the symptom calendar and trend analysis.

use super::{ApiClient, ApiResponse, Session, Transport};
use crate::error::ApiError;
use crate::models::{CalendarEvent, SymptomEntry, TrendAnalysis};

pub async fn log_symptom<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    entry: &SymptomEntry,
) -> Result<ApiResponse, ApiError> {
    api.post("/log_symptom", entry).await
}

/// Events for one calendar month (`month` is 1-based)
pub async fn get_symptoms<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    year: i32,
    month: u32,
) -> Result<Vec<CalendarEvent>, ApiError> {
    let path = format!("/get_symptoms?year={}&month={}", year, month);
    api.get(&path).await?.into_result()?.decode()
}

pub async fn analyze_trends<T: Transport, S: Session>(api: &ApiClient<T, S>) -> Result<String, ApiError> {
    let analysis: TrendAnalysis = api.post_empty("/analyze_trends").await?.into_result()?.decode()?;
    Ok(analysis.analysis)
}
