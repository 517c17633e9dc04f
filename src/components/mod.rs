//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`auth`] - Login / registration screen
//! - [`dashboard`] - File dashboard
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth;
pub mod dashboard;
pub mod icons;
pub mod router;

pub use router::AppRouter;
