//! Root application module.
//!
//! Contains the main App component, AppContext definition and
//! application-level setup logic following Leptos conventions.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::{API_BASE, APP_NAME};
use crate::core::auth;
use crate::core::{LocalTokenStore, Session, SessionStore};
use crate::models::AppRoute;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// The session signal mirrors the token in localStorage: it is seeded from
/// storage on startup and every login/logout updates both.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Option<Session>>,
}

impl AppContext {
    /// Creates the context, restoring a stored session if there is one.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(LocalTokenStore.load()),
        }
    }

    pub fn has_session(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Publish a freshly stored session and go to the dashboard.
    pub fn sign_in(&self, session: Session) {
        self.session.set(Some(session));
        AppRoute::Dashboard.push();
    }

    /// Drop the stored token and return to the auth screen.
    pub fn sign_out(&self) {
        auth::sign_out(&LocalTokenStore);
        self.session.set(None);
        AppRoute::Auth.push();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    log!("{} using backend {}", APP_NAME, API_BASE);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc3545; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #6c757d; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc3545; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #3b71ca;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
