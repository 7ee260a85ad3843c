//! Small DOM utilities shared by the pages.
//!
//! - **User feedback**: transient toast notifications and confirmation prompts.
//! - **Event decoding**: reading values out of `<input>`, `<textarea>` and
//!   `<select>` events.
//! - **Number display**: thousands separators for credit amounts.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Displays a temporary notification in the top-right corner.
///
/// The element removes itself after a few seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let background = match kind {
        ToastKind::Success => "#16a34a",
        ToastKind::Error => "#dc2626",
    };
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "20px").ok();
    style.set_property("right", "20px").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "8px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Inter, Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn toast_success(message: &str) {
    show_toast(message, ToastKind::Success);
}

pub fn toast_error(message: &str) {
    show_toast(message, ToastKind::Error);
}

/// Native `window.confirm`; a missing window counts as "cancel".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Parses a `<select>` value holding a numeric id; the empty placeholder
/// option yields `None`.
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// `12345` → `12 345`, the way the French locale groups digits.
pub fn format_credits(n: i64) -> String {
    n.to_formatted_string(&Locale::fr)
}

/// Inline error line rendered under a form field.
pub fn field_error(error: Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_from_select_values() {
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn credits_are_grouped() {
        assert_eq!(format_credits(999), "999");
        assert!(format_credits(12_345).ends_with("345"));
        assert_ne!(format_credits(12_345), "12345");
    }
}
