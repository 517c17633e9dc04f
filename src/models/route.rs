//! Hash-based routing between the auth screen and the dashboard.
//!
//! URL format: `#/`, `#/auth`, `#/dashboard`. Hash routing keeps the app
//! servable from any static host without rewrite rules.

/// Application routes parsed from the URL hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `#/` or empty hash
    Root,
    /// `#/auth`
    Auth,
    /// `#/dashboard`
    Dashboard,
    /// Anything else, kept for logging.
    Unknown(String),
}

/// Screen rendered for a resolved route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Dashboard,
}

/// What the router does with a route given the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Screen),
    Redirect(AppRoute),
}

impl AppRoute {
    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Self::Root,
            "auth" => Self::Auth,
            "dashboard" => Self::Dashboard,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Root => "#/".to_string(),
            Self::Auth => "#/auth".to_string(),
            Self::Dashboard => "#/dashboard".to_string(),
            Self::Unknown(path) => format!("#/{}", path),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route, adding a history entry.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route, replacing the current history entry.
    pub fn replace(&self) {
        crate::utils::dom::replace_hash(&self.to_hash());
    }

    /// Decide what to show for this route.
    ///
    /// Only the presence of a session matters; the token is never validated
    /// client-side.
    pub fn resolve(&self, has_session: bool) -> RouteDecision {
        match (self, has_session) {
            (Self::Root, false) => RouteDecision::Redirect(Self::Auth),
            (Self::Root, true) => RouteDecision::Redirect(Self::Dashboard),
            (Self::Auth, false) => RouteDecision::Render(Screen::Auth),
            (Self::Auth, true) => RouteDecision::Redirect(Self::Dashboard),
            (Self::Dashboard, false) => RouteDecision::Redirect(Self::Auth),
            (Self::Dashboard, true) => RouteDecision::Render(Screen::Dashboard),
            (Self::Unknown(_), _) => RouteDecision::Redirect(Self::Root),
        }
    }

    /// Follow redirects until a screen is reached.
    pub fn screen(&self, has_session: bool) -> (Screen, AppRoute) {
        let mut route = self.clone();
        loop {
            match route.resolve(has_session) {
                RouteDecision::Render(screen) => return (screen, route),
                RouteDecision::Redirect(next) => route = next,
            }
        }
    }
}
