//! Symptom Panel Component
//!
//! Log form, this month's entries, and the trend analysis button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::commands::browser_api;
use crate::markdown::render_reply;
use crate::models::Severity;
use crate::platform::BrowserPlatform;
use crate::store::{store_set_symptom_events, store_symptom_events, use_app_store, use_client_config};
use crate::symptoms;

/// (year, 1-based month) of the local date
fn current_month() -> (i32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_full_year() as i32, now.get_month() + 1)
}

/// Local date as `YYYY-MM-DD`
fn today() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
}

#[component]
pub fn SymptomPanel() -> impl IntoView {
    let store = use_app_store();
    let config = StoredValue::new(use_client_config());

    let (symptom, set_symptom) = signal(String::new());
    let (log_date, set_log_date) = signal(today());
    let (severity, set_severity) = signal(Severity::default());
    let (notes, set_notes) = signal(String::new());
    let (analysis, set_analysis) = signal::<Option<String>>(None);
    let (analyzing, set_analyzing) = signal(false);

    let reload_month = move || {
        let config = config.get_value();
        let (year, month) = current_month();
        spawn_local(async move {
            if let Some(events) = symptoms::month_events(&browser_api(&config), year, month).await {
                store_set_symptom_events(&store, events);
            }
        });
    };

    Effect::new(move |_| reload_month());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(entry) = symptoms::prepare_entry(
            &symptom.get_untracked(),
            &log_date.get_untracked(),
            severity.get_untracked(),
            &notes.get_untracked(),
        ) else {
            return;
        };

        let config = config.get_value();
        spawn_local(async move {
            if symptoms::log_entry(&browser_api(&config), &BrowserPlatform, &entry).await {
                set_symptom.set(String::new());
                set_notes.set(String::new());
                reload_month();
            }
        });
    };

    let on_analyze = move |_| {
        set_analyzing.set(true);
        let config = config.get_value();
        spawn_local(async move {
            let text = symptoms::analyze(&browser_api(&config)).await;
            set_analysis.set(Some(text));
            set_analyzing.set(false);
        });
    };

    view! {
        <form id="symptom-form" class="symptom-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Symptom (e.g. Headache)"
                prop:value=move || symptom.get()
                on:input=move |ev| set_symptom.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || log_date.get()
                on:input=move |ev| set_log_date.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_severity.set(Severity::from_label(&event_target_value(&ev)))>
                {Severity::ALL.iter().map(|level| {
                    let value = level.as_str();
                    view! { <option value=value selected={*level == Severity::default()}>{value}</option> }
                }).collect_view()}
            </select>
            <textarea
                placeholder="Notes"
                prop:value=move || notes.get()
                on:input=move |ev| set_notes.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Log symptom"</button>
        </form>

        <ul class="symptom-events">
            <For
                each=move || store_symptom_events(&store).into_iter().enumerate()
                key=|(index, event)| (*index, event.start.clone(), event.title.clone())
                children=move |(_, event)| {
                    let style = event
                        .color
                        .as_ref()
                        .map(|color| format!("border-left: 4px solid {};", color))
                        .unwrap_or_default();
                    let details = event.extended_props;
                    view! {
                        <li style=style title=details.notes.unwrap_or_default()>
                            <span class="event-date">{event.start}</span>
                            <span class="event-title">{event.title}</span>
                            <span class="event-severity">{details.severity.unwrap_or_default()}</span>
                        </li>
                    }
                }
            />
        </ul>

        <button class="analyze-btn" disabled=move || analyzing.get() on:click=on_analyze>
            {move || if analyzing.get() { "Analyzing..." } else { "Analyze my trends" }}
        </button>
        {move || analysis.get().map(|text| view! {
            <div class="trend-analysis" inner_html=render_reply(&text)></div>
        })}
    }
}
