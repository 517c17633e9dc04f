//! Session token handling.
//!
//! The bearer token is persisted under a single localStorage key and
//! travels through the application as an explicit [`Session`] value.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde_json::Value;

use crate::config::{FALLBACK_USER_LABEL, TOKEN_KEY};
use crate::core::error::StorageError;
use crate::utils::dom;

/// An authenticated session: the bearer token issued by `/login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Authorization` header for this session.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Display label derived from the token payload.
    ///
    /// Purely cosmetic: the payload is decoded without verification and any
    /// failure yields the generic label.
    pub fn user_label(&self) -> String {
        self.user_id()
            .map(|id| format!("User ID: {}", id))
            .unwrap_or_else(|| FALLBACK_USER_LABEL.to_string())
    }

    fn user_id(&self) -> Option<String> {
        let segment = self.token.split('.').nth(1)?.trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(segment)
            .or_else(|_| STANDARD_NO_PAD.decode(segment))
            .ok()?;
        let payload: Value = serde_json::from_slice(&bytes).ok()?;

        match payload.get("user_id")? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Persistence for the session token.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Token store backed by browser localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl SessionStore for LocalTokenStore {
    fn load(&self) -> Option<Session> {
        let storage = dom::local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        (!token.is_empty()).then(|| Session::new(token))
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
        storage
            .set_item(TOKEN_KEY, session.token())
            .map_err(|_| StorageError::SaveFailed)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
        storage
            .remove_item(TOKEN_KEY)
            .map_err(|_| StorageError::RemoveFailed)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.sig",
            URL_SAFE_NO_PAD.encode(payload.as_bytes())
        )
    }

    #[test]
    fn test_user_label_from_numeric_id() {
        let session = Session::new(token_with_payload(r#"{"user_id":42,"exp":1700000000}"#));
        assert_eq!(session.user_label(), "User ID: 42");
    }

    #[test]
    fn test_user_label_from_string_id() {
        let session = Session::new(token_with_payload(r#"{"user_id":"abc"}"#));
        assert_eq!(session.user_label(), "User ID: abc");
    }

    #[test]
    fn test_user_label_fallbacks() {
        assert_eq!(Session::new("opaque").user_label(), "User");
        assert_eq!(Session::new("a.!!!.c").user_label(), "User");
        assert_eq!(
            Session::new(token_with_payload("not json")).user_label(),
            "User"
        );
        assert_eq!(
            Session::new(token_with_payload(r#"{"sub":"x"}"#)).user_label(),
            "User"
        );
    }

    #[test]
    fn test_padded_standard_segment() {
        // `{"user_id":7}` in standard base64 with padding.
        let session = Session::new("h.eyJ1c2VyX2lkIjo3fQ==.s");
        assert_eq!(session.user_label(), "User ID: 7");
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(Session::new("t0k").bearer(), "Bearer t0k");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::default();
        assert!(store.load().is_none());
        store.save(&Session::new("abc")).unwrap();
        assert_eq!(store.load(), Some(Session::new("abc")));
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_roundtrip() {
        let store = LocalTokenStore;
        store.clear().unwrap();
        assert!(store.load().is_none());

        store.save(&Session::new("browser-token")).unwrap();
        assert_eq!(store.load().unwrap().token(), "browser-token");

        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
