//! Submitted form helpers

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};

use crate::models::FormFields;

/// All named fields of the submitted form as a flat object
pub fn submitted_fields(ev: &SubmitEvent) -> Result<FormFields, String> {
    let form = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        .ok_or_else(|| "submit target is not a form".to_string())?;
    let data = FormData::new_with_form(&form).map_err(|e| format!("{:?}", e))?;
    let entries = js_sys::Object::from_entries(&data).map_err(|e| format!("{:?}", e))?;
    serde_wasm_bindgen::from_value(entries.into()).map_err(|e| e.to_string())
}
