//! Core logic for the vault client.
//!
//! This module provides:
//! - [`VaultClient`] typed access to the REST backend over a [`Transport`]
//! - [`Session`] and [`SessionStore`] for the bearer token
//! - [`auth`] login/registration flow
//! - [`Dashboard`] file actions with refetch-after-mutation

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod error;
pub mod session;

pub use api::VaultClient;
pub use dashboard::{Dashboard, Listing, VaultView};
pub use session::{LocalTokenStore, Session, SessionStore};
