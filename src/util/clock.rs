//! Display-time formatting.
//!
//! Timestamps shown in the UI are purely presentational; the server owns all
//! authoritative creation times.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current local date-time as a display string.
///
/// Browser-only; outside hydrate builds (SSR, native tests) callers pass
/// their own fixed strings instead.
pub fn display_now() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(
            js_sys::Date::new_0().to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Reduce a server ISO-8601 timestamp to its date portion for list rows.
/// Falls back to the input unchanged when it is shorter than a full date.
pub fn display_date(iso: &str) -> &str {
    match iso.get(..10) {
        Some(date) if date.as_bytes()[4] == b'-' && date.as_bytes()[7] == b'-' => date,
        _ => iso,
    }
}
