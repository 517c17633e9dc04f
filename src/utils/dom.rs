//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Storage, Url, Window};

use crate::core::dashboard::Host;
use crate::core::error::SaveError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix.
/// Does not fire `hashchange`; callers update their route state themselves.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(hash));
    }
}

// =============================================================================
// Files
// =============================================================================

/// Build a Blob from raw bytes.
pub fn bytes_to_blob(bytes: &[u8], content_type: Option<&str>) -> Result<Blob, JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    match content_type {
        Some(ct) if !ct.is_empty() => {
            let options = BlobPropertyBag::new();
            options.set_type(ct);
            Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        }
        _ => Blob::new_with_u8_array_sequence(&parts),
    }
}

/// Offer bytes to the user as a download.
///
/// Creates a temporary object URL, clicks a detached anchor pointing at it,
/// then revokes the URL.
pub fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), SaveError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(SaveError::NoDocument)?;
    let rejected = |e: JsValue| SaveError::Rejected(js_error_message(&e));

    let blob = bytes_to_blob(bytes, None).map_err(rejected)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(rejected)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(rejected)?
        .dyn_into()
        .map_err(|_| SaveError::Rejected("not an anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(rejected)
}

/// Best-effort text of a thrown or rejected JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Dialogs
// =============================================================================

/// [`Host`] backed by the browser's blocking dialogs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn confirm(&self, message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        window()?.prompt_with_message(message).ok()?
    }

    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<(), SaveError> {
        save_bytes(filename, bytes)
    }
}
