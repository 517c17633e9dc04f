//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileRecord`], [`SharedFileRecord`] - Records served by the backend
//! - [`AuthMode`] - Login/register form mode
//! - [`AppRoute`], [`Screen`] - Hash-based navigation

mod auth;
mod file;
mod route;

pub use auth::AuthMode;
pub use file::{
    FileContent, FilePayload, FileRecord, ShareRequest, SharedFileRecord, UploadReceipt,
    decode_list,
};
pub use route::{AppRoute, Screen};
