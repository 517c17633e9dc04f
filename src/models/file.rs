//! File records as served by the vault backend.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::core::error::FetchError;

/// A file owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    pub filename: String,
    /// RFC 3339 timestamp as sent by the backend.
    pub uploaded_at: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub file_hash: Option<String>,
    /// Number of uploads deduplicated onto this content.
    #[serde(default)]
    pub ref_count: Option<i64>,
}

/// A file another user granted the viewer access to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharedFileRecord {
    #[serde(flatten)]
    pub file: FileRecord,
    #[serde(default)]
    pub shared_by: Option<i64>,
    #[serde(default)]
    pub share_type: Option<String>,
}

impl SharedFileRecord {
    /// Sharer id for display, "Unknown" when the backend omits it.
    ///
    /// The backend serializes a missing id as `0`, so non-positive ids count
    /// as absent.
    pub fn sharer_label(&self) -> String {
        let known = |id: &i64| *id > 0;
        self.shared_by
            .filter(known)
            .or(self.file.user_id.filter(known))
            .map(|id| id.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Body of `POST /share`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub file_id: i64,
    pub target_user: i64,
}

/// Backend acknowledgement of an upload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_id: Option<i64>,
}

/// Content of a file queued for upload.
#[derive(Clone, Debug, PartialEq)]
pub enum FileContent {
    /// Handle to the file the user picked; the browser streams it as is.
    Picked(web_sys::File),
    /// In-memory content.
    #[cfg(test)]
    Bytes(Vec<u8>),
}

/// A file queued for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct FilePayload {
    pub name: String,
    pub content_type: Option<String>,
    pub content: FileContent,
}

impl FilePayload {
    /// Wrap a file from an `<input type="file">` without reading it.
    pub fn picked(file: web_sys::File) -> Self {
        let content_type = file.type_();
        Self {
            name: file.name(),
            content_type: (!content_type.is_empty()).then_some(content_type),
            content: FileContent::Picked(file),
        }
    }
}

/// Decode a list endpoint body.
///
/// The backend encodes an empty result as `null`; that and any other
/// non-array value decode to an empty list. Malformed elements are an error.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;

    if !value.is_array() {
        return Ok(Vec::new());
    }

    serde_json::from_value(value).map_err(|e| FetchError::JsonParseError(e.to_string()))
}
