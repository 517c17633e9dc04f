//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`BrowserTransport`] - Fetch API transport
//! - [`BrowserHost`] - Blocking dialogs and file saving
//! - [`format`] - Display formatting

pub mod dom;
mod fetch;
pub mod format;

pub use dom::BrowserHost;
pub use fetch::BrowserTransport;
