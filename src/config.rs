//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The backend location is fixed at compile time through the
//! `FILEVAULT_API_BASE` environment variable.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar and page title.
pub const APP_NAME: &str = "File Vault";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the vault backend, without a trailing slash.
pub const API_BASE: &str = match option_env!("FILEVAULT_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8080",
};

/// Multipart field name the backend reads uploads from.
pub const UPLOAD_FIELD: &str = "file";

// =============================================================================
// Session Configuration
// =============================================================================

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Label shown when the token payload cannot be decoded.
pub const FALLBACK_USER_LABEL: &str = "User";

// =============================================================================
// User-facing Messages
// =============================================================================

/// Texts surfaced by the auth form and dashboard alerts.
pub mod messages {
    pub const REQUEST_FAILED: &str = "Request failed";
    pub const NETWORK_ERROR: &str = "Network error";
    pub const MISSING_TOKEN: &str = "Login succeeded but no token received";
    pub const REGISTERED: &str = "Registration successful. Please log in.";

    pub const UPLOADED: &str = "File uploaded";
    pub const UPLOAD_FAILED: &str = "Upload failed";
    pub const DOWNLOAD_FAILED: &str = "Download failed";
    pub const CONFIRM_DELETE: &str = "Are you sure?";
    pub const DELETED: &str = "File deleted";
    pub const DELETE_FAILED: &str = "Delete failed";
    pub const SHARE_PROMPT: &str = "Enter target user ID:";
    pub const INVALID_TARGET: &str = "Invalid user ID";
    pub const SHARED: &str = "File shared";
    pub const SHARE_FAILED: &str = "Share failed";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
