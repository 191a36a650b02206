//! Session gate: the single owner of the authenticated identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component constructs one `SessionGate` and provides it through
//! context. Route gating, the sidebar, and every page read identity from it;
//! only its operations write identity or theme to durable storage.
//!
//! STATE MACHINE
//! =============
//! `Resolving` -> (`Anonymous` | `Authenticated`) on startup resolution, then
//! `Anonymous` <-> `Authenticated` via `login` / `logout`. There is no partial
//! identity state: `Phase::Authenticated` always carries a complete `Identity`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;
use crate::state::theme::Theme;
use crate::util::routes::{ProtectedRoute, PublicRoute};
use crate::util::storage::{BrowserStorage, DurableStorage};

/// Storage key holding the serialized identity.
pub const IDENTITY_KEY: &str = "cashflow_user";
/// Storage key holding the theme literal.
pub const THEME_KEY: &str = "cashflow_theme";
/// Query-string marker attached to the login route after a failed OAuth handoff.
pub const OAUTH_FAILED: &str = "oauth_failed";

/// Authentication phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Startup resolution has not run yet. Rendered as a loading indicator.
    #[default]
    Resolving,
    Anonymous,
    Authenticated(Identity),
}

impl Phase {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }
}

/// Where the caller should navigate after an OAuth handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    ProtectedRoot,
    /// Login route with the OAuth failure indicator attached.
    LoginFailed,
}

impl Navigation {
    pub fn path(self) -> String {
        match self {
            Self::ProtectedRoot => ProtectedRoute::Dashboard.to_string(),
            Self::LoginFailed => format!("{}?error={OAUTH_FAILED}", PublicRoute::Login),
        }
    }
}

/// Identity and theme state mirrored into durable storage.
#[derive(Clone, Debug, Default)]
pub struct SessionGate<S> {
    storage: S,
    phase: Phase,
    theme: Theme,
}

/// The gate as wired into the browser application.
pub type BrowserSession = SessionGate<BrowserStorage>;

impl<S: DurableStorage> SessionGate<S> {
    /// Construct an unresolved gate. Call [`SessionGate::resolve`] before rendering routes.
    pub fn new(storage: S) -> Self {
        Self { storage, phase: Phase::Resolving, theme: Theme::default() }
    }

    /// Startup resolution: load identity and theme from storage.
    ///
    /// A missing or malformed identity resolves to `Anonymous`; a missing or
    /// unknown theme literal resolves to light. Never fails.
    pub fn resolve(&mut self) {
        self.phase = match self.storage.get(IDENTITY_KEY) {
            Some(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    log::debug!("session: restored identity {}", identity.id);
                    Phase::Authenticated(identity)
                }
                Err(e) => {
                    log::debug!("session: ignoring malformed stored identity: {e}");
                    Phase::Anonymous
                }
            },
            None => Phase::Anonymous,
        };
        self.theme = self
            .storage
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
    }

    /// Replace the active identity and persist it.
    pub fn login(&mut self, identity: Identity) {
        match serde_json::to_string(&identity) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(IDENTITY_KEY, &raw) {
                    log::warn!("session: identity not persisted: {e}");
                }
            }
            Err(e) => log::warn!("session: identity not serializable: {e}"),
        }
        log::info!("session: logged in as {}", identity.username);
        self.phase = Phase::Authenticated(identity);
    }

    /// Clear the active identity from memory and storage. Idempotent.
    pub fn logout(&mut self) {
        if self.phase.identity().is_some() {
            log::info!("session: logged out");
        }
        if let Err(e) = self.storage.remove(IDENTITY_KEY) {
            log::warn!("session: stored identity not cleared: {e}");
        }
        self.phase = Phase::Anonymous;
    }

    /// Finish an OAuth redirect whose identity arrives as query parameters.
    ///
    /// `param` looks up a query parameter by name. Values are trimmed. The
    /// identity is built only when `userId`, `username`, and `email` are all
    /// present and non-blank and `userId` parses as an integer; otherwise
    /// state is left untouched.
    pub fn complete_oauth_handoff<F>(&mut self, param: F) -> Navigation
    where
        F: Fn(&str) -> Option<String>,
    {
        match identity_from_params(param) {
            Some(identity) => {
                self.login(identity);
                Navigation::ProtectedRoot
            }
            None => {
                log::warn!("session: OAuth handoff rejected, parameters missing or malformed");
                Navigation::LoginFailed
            }
        }
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.storage.set(THEME_KEY, self.theme.as_str()) {
            log::warn!("session: theme not persisted: {e}");
        }
        self.theme
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.phase.identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn identity_from_params<F>(param: F) -> Option<Identity>
where
    F: Fn(&str) -> Option<String>,
{
    let present = |name: &str| {
        param(name)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    };
    let id = present("userId")?.parse::<i64>().ok()?;
    let username = present("username")?;
    let email = present("email")?;
    Some(Identity { id, username, email })
}
