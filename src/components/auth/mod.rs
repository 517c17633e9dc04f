//! Login / registration screen.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{API_BASE, APP_NAME};
use crate::core::auth::{self, AuthForm, AuthOutcome};
use crate::core::{LocalTokenStore, VaultClient};
use crate::models::AuthMode;
use crate::utils::BrowserTransport;

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

/// Auth form toggling between login and register.
///
/// A successful login hands the session to [`AppContext::sign_in`]; the
/// router takes it from there. Registration flips the form back to login.
#[component]
pub fn LoginSignup() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let mode = RwSignal::new(AuthMode::Login);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let form = AuthForm {
            mode: mode.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        message.set(None);
        busy.set(true);

        spawn_local(async move {
            let client = VaultClient::new(API_BASE, BrowserTransport);
            let outcome = auth::submit(&client, &LocalTokenStore, &form).await;
            busy.set(false);

            message.set(outcome.message().map(str::to_string));
            if let Some(next) = outcome.next_mode() {
                mode.set(next);
            }
            if let AuthOutcome::LoggedIn(session) = outcome {
                ctx.sign_in(session);
            }
        });
    };

    let toggle_mode = move |ev: MouseEvent| {
        ev.prevent_default();
        mode.update(|m| *m = m.toggled());
        message.set(None);
    };

    let submit_label = move || {
        if busy.get() {
            "Please wait..."
        } else {
            mode.get().submit_label()
        }
    };

    view! {
        <main class=css::page>
            <form class=css::card on:submit=on_submit>
                <h1 class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::VAULT /></span>
                    {APP_NAME}
                </h1>

                <Show when=move || !mode.get().is_login()>
                    <label class=css::field>
                        <span>"Username"</span>
                        <input
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label class=css::field>
                    <span>"Email address"</span>
                    <input
                        type="email"
                        required
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class=css::field>
                    <span>"Password"</span>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || message.get().map(|msg| view! { <p class=css::message>{msg}</p> })}

                <button class=css::submit type="submit" disabled=move || busy.get()>
                    {submit_label}
                </button>

                <p class=css::switch>
                    {move || mode.get().switch_prompt()}
                    " "
                    <a href="#" class=css::switchLink on:click=toggle_mode>
                        {move || mode.get().toggled().submit_label()}
                    </a>
                </p>
            </form>
        </main>
    }
}
