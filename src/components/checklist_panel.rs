//! Checklist Panel Component
//!
//! Add form plus the item list. The list has a single click listener; clicks
//! are reduced to a [`ClickSnapshot`] and routed through the checklist
//! dispatch table, so appended rows need no listeners of their own.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, MouseEvent, SubmitEvent};

use crate::checklist::{classify_click, Checklist, ChecklistEvent, ClickSnapshot, ClickedElement, UpdatePolicy};
use crate::commands::browser_api;
use crate::models::{ChecklistItem, ItemId};
use crate::platform::BrowserPlatform;
use crate::store::{
    store_checklist, store_checklist_input, store_item_completed, store_set_checklist_input, use_app_store,
    use_client_config, StoreChecklistView,
};

/// Checklist form and list
#[component]
pub fn ChecklistPanel() -> impl IntoView {
    let store = use_app_store();
    let config = StoredValue::new(use_client_config());

    let dispatch = move |event: ChecklistEvent| {
        let config = config.get_value();
        let checklist = Checklist::new(browser_api(&config), StoreChecklistView::new(store), BrowserPlatform)
            .with_policy(config.update_policy)
            .with_delete_prompt(config.delete_prompt);
        spawn_local(async move {
            let outcome = checklist.dispatch(event).await;
            log::debug!("checklist event finished: {:?}", outcome);
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(ChecklistEvent::Submit { content: store_checklist_input(&store) });
    };

    let on_click = move |ev: MouseEvent| {
        let Some(snapshot) = snapshot_click(&ev) else { return };
        // Confirmed updates leave the checkbox as it was until the server answers
        if matches!(snapshot.element, ClickedElement::Checkbox { .. })
            && config.with_value(|c| c.update_policy) == UpdatePolicy::Confirmed
        {
            ev.prevent_default();
        }
        if let Some(event) = classify_click(snapshot) {
            dispatch(event);
        }
    };

    view! {
        <form id="checklist-form" class="checklist-form" on:submit=on_submit>
            <input
                id="checklist-input"
                type="text"
                placeholder="Add a health task..."
                prop:value=move || store_checklist_input(&store)
                on:input=move |ev| store_set_checklist_input(&store, event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>

        <ul id="checklist" class="checklist" on:click=on_click>
            <For
                each=move || store_checklist(&store)
                key=|item| item.id.clone()
                children=move |item| {
                    let id = item.id.clone();
                    let id_for_check = item.id.clone();
                    view! {
                        <li
                            data-id=item.id.to_string()
                            class:completed=move || store_item_completed(&store, &id)
                        >
                            <input
                                type="checkbox"
                                prop:checked=move || store_item_completed(&store, &id_for_check)
                            />
                            <span>{item.content}</span>
                            <button type="button">"×"</button>
                        </li>
                    }
                }
            />
        </ul>
    }
}

/// Reduce a click inside the list to the fields the handlers need
fn snapshot_click(ev: &MouseEvent) -> Option<ClickSnapshot> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;

    let entry_id = target
        .closest("li")
        .ok()
        .flatten()
        .and_then(|li| li.get_attribute("data-id"))
        .map(ItemId::new);

    let element = match target.dyn_ref::<HtmlInputElement>() {
        Some(input) if input.type_() == "checkbox" => ClickedElement::Checkbox { checked: input.checked() },
        Some(_) => ClickedElement::Other,
        None if target.tag_name() == "BUTTON" => ClickedElement::Button,
        None => ClickedElement::Other,
    };

    Some(ClickSnapshot { element, entry_id })
}

/// Read `<li data-id>` entries the server rendered into `root`
pub fn read_rendered_items(root: &Element) -> Vec<ChecklistItem> {
    let Ok(nodes) = root.query_selector_all("li[data-id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|li| {
            let id = li.get_attribute("data-id")?;
            let content = li
                .query_selector("span")
                .ok()
                .flatten()
                .and_then(|span| span.text_content())
                .unwrap_or_default();
            let checked = li
                .query_selector("input[type=checkbox]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.checked())
                .unwrap_or(false);
            let completed = checked || li.class_list().contains("completed");
            Some(ChecklistItem::new(id, content.trim(), completed))
        })
        .collect()
}
