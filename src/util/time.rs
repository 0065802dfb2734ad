//! Local timestamp formatting.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Format an ISO-8601 timestamp in the viewer's locale.
///
/// Missing or empty values render as an empty cell. Outside the browser
/// the raw string passes through; hydration repaints it in local form.
pub fn format_local(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp else {
        return String::new();
    };
    if raw.is_empty() {
        return String::new();
    }

    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
