//! Login and registration flow.
//!
//! The form state is plain data; [`submit`] performs the request for the
//! current mode, persists the token on a successful login and reports what
//! the screen should do next.

use leptos::logging::warn;

use crate::config::messages;
use crate::core::api::{Transport, VaultClient};
use crate::core::error::FetchError;
use crate::core::session::{Session, SessionStore};
use crate::models::AuthMode;

/// Values typed into the auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Result of submitting the auth form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token stored; the caller should publish the session and navigate.
    LoggedIn(Session),
    /// Account created; the form switches to login mode.
    Registered,
    /// Message to show inline. Nothing was stored.
    Failed(String),
}

impl AuthOutcome {
    /// Inline message for this outcome, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::LoggedIn(_) => None,
            Self::Registered => Some(messages::REGISTERED),
            Self::Failed(msg) => Some(msg.as_str()),
        }
    }

    /// Mode the form switches to after this outcome, if it changes.
    pub fn next_mode(&self) -> Option<AuthMode> {
        match self {
            Self::Registered => Some(AuthMode::Login),
            Self::LoggedIn(_) | Self::Failed(_) => None,
        }
    }
}

fn failure_text(err: FetchError) -> String {
    match err {
        FetchError::Http { message, .. } => message,
        FetchError::NetworkError(msg) if !msg.is_empty() => msg,
        e if e.is_network() => messages::NETWORK_ERROR.to_string(),
        e => e.to_string(),
    }
}

/// Submit the form in its current mode.
pub async fn submit<T, S>(client: &VaultClient<T>, store: &S, form: &AuthForm) -> AuthOutcome
where
    T: Transport,
    S: SessionStore,
{
    match form.mode {
        AuthMode::Login => match client.login(&form.email, &form.password).await {
            Ok(Some(token)) => {
                let session = Session::new(token);
                if let Err(e) = store.save(&session) {
                    warn!("token not persisted: {}", e);
                }
                AuthOutcome::LoggedIn(session)
            }
            Ok(None) => AuthOutcome::Failed(messages::MISSING_TOKEN.to_string()),
            Err(e) => AuthOutcome::Failed(failure_text(e)),
        },
        AuthMode::Register => {
            let username = Some(form.username.trim()).filter(|u| !u.is_empty());
            match client
                .register(username, &form.email, &form.password)
                .await
            {
                Ok(_) => AuthOutcome::Registered,
                Err(e) => AuthOutcome::Failed(failure_text(e)),
            }
        }
    }
}

/// Forget the stored token. The caller drops its session afterwards.
pub fn sign_out<S: SessionStore>(store: &S) {
    if let Err(e) = store.clear() {
        warn!("token not removed: {}", e);
    }
}
