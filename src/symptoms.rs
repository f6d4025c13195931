//! Symptom log and trend analysis flows.

use crate::commands::{self, ApiClient, Session, Transport};
use crate::models::{CalendarEvent, Severity, SymptomEntry};
use crate::platform::Dialogs;

pub const LOG_FAILED_NOTICE: &str = "Could not save the symptom. Please try again.";
pub const ANALYSIS_FAILED_NOTICE: &str = "Sorry, trend analysis is unavailable right now.";

/// Build an entry from form input; symptom name and date are required
pub fn prepare_entry(symptom: &str, log_date: &str, severity: Severity, notes: &str) -> Option<SymptomEntry> {
    let symptom = symptom.trim();
    let log_date = log_date.trim();
    if symptom.is_empty() || log_date.is_empty() {
        return None;
    }
    Some(SymptomEntry {
        symptom: symptom.to_string(),
        log_date: log_date.to_string(),
        severity,
        notes: notes.trim().to_string(),
    })
}

/// Save an entry and alert the server's reply. Returns whether it was stored.
pub async fn log_entry<T, S, D>(api: &ApiClient<T, S>, dialogs: &D, entry: &SymptomEntry) -> bool
where
    T: Transport,
    S: Session,
    D: Dialogs,
{
    match commands::log_symptom(api, entry).await {
        Ok(response) => {
            let stored = response.is_success();
            match response.message() {
                Some(message) => dialogs.alert(message),
                None if !stored => dialogs.alert(LOG_FAILED_NOTICE),
                None => {}
            }
            stored
        }
        Err(err) => {
            log::error!("Error logging symptom: {}", err);
            dialogs.alert(LOG_FAILED_NOTICE);
            false
        }
    }
}

/// Events for the given month; `None` when they could not be loaded
pub async fn month_events<T: Transport, S: Session>(
    api: &ApiClient<T, S>,
    year: i32,
    month: u32,
) -> Option<Vec<CalendarEvent>> {
    match commands::get_symptoms(api, year, month).await {
        Ok(events) => {
            log::info!("loaded {} symptom events for {}-{:02}", events.len(), year, month);
            Some(events)
        }
        Err(err) => {
            log::error!("Error loading symptoms: {}", err);
            None
        }
    }
}

pub async fn analyze<T: Transport, S: Session>(api: &ApiClient<T, S>) -> String {
    match commands::analyze_trends(api).await {
        Ok(analysis) => analysis,
        Err(err) => {
            log::error!("Error analyzing trends: {}", err);
            ANALYSIS_FAILED_NOTICE.to_string()
        }
    }
}
