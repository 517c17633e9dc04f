//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash and session decide the screen**: see [`AppRoute::resolve`]
//! - **Redirects replace history**: back never lands on a redirecting route
//! - **Session changes re-route**: logging in or out moves the user without
//!   an explicit navigation

use leptos::logging::log;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::auth::LoginSignup;
use crate::components::dashboard::DashboardScreen;
use crate::models::{AppRoute, Screen};

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → redirect by session
/// - `#/auth` → LoginSignup (signed out)
/// - `#/dashboard` → Dashboard (signed in)
/// - anything else → back to `#/`
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let resolved = Memo::new(move |_| route.get().screen(ctx.has_session()));
    let screen = Memo::new(move |_| resolved.get().0);

    // Rewrite the URL when the decision landed somewhere else
    Effect::new(move |_| {
        let (_, target) = resolved.get();
        let current = route.get_untracked();
        if current != target {
            log!("redirect {} -> {}", current.to_hash(), target.to_hash());
            target.replace();
            route.set(target);
        }
    });

    view! {
        {move || match screen.get() {
            Screen::Auth => view! { <LoginSignup /> }.into_any(),
            Screen::Dashboard => view! { <DashboardScreen /> }.into_any(),
        }}
    }
}
