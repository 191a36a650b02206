//! Route surface and the gating decision.
//!
//! The public and protected sets are disjoint: a path belongs to at most one
//! of them, and which set is reachable depends only on whether the session
//! holds an identity.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt::Display;

use crate::state::session::Phase;

/// Routes reachable only while logged out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PublicRoute {
    #[default]
    Login,
    Register,
    OAuthCallback,
}

/// Routes reachable only while logged in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProtectedRoute {
    #[default]
    Dashboard,
    Expenses,
    Categories,
    Credits,
    Thresholds,
    Statistics,
}

/// Any concrete application route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Public(PublicRoute),
    Protected(ProtectedRoute),
}

/// Which route tree is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteSet {
    Public,
    Protected,
}

/// Outcome of gating a requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session is still resolving; render only the loading indicator.
    Loading,
    Render(AppRoute),
    /// Path is outside the reachable set; replace it with this route.
    Redirect(AppRoute),
}

impl PublicRoute {
    pub const ALL: [Self; 3] = [Self::Login, Self::Register, Self::OAuthCallback];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::OAuthCallback => "/oauth2/callback",
        }
    }
}

impl ProtectedRoute {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Expenses,
        Self::Categories,
        Self::Credits,
        Self::Thresholds,
        Self::Statistics,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Expenses => "/expenses",
            Self::Categories => "/categories",
            Self::Credits => "/credits",
            Self::Thresholds => "/thresholds",
            Self::Statistics => "/stats",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::Categories => "Categories",
            Self::Credits => "Credits",
            Self::Thresholds => "Alerts",
            Self::Statistics => "Statistics",
        }
    }

    /// Page heading shown in the top navbar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Credits => "Credits & Income",
            Self::Thresholds => "Thresholds & Alerts",
            other => other.label(),
        }
    }
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Public(route) => route.path(),
            Self::Protected(route) => route.path(),
        }
    }

    pub fn set(self) -> RouteSet {
        match self {
            Self::Public(_) => RouteSet::Public,
            Self::Protected(_) => RouteSet::Protected,
        }
    }
}

impl RouteSet {
    /// The set reachable in `phase`, or `None` while resolving.
    pub fn for_phase(phase: &Phase) -> Option<Self> {
        match phase {
            Phase::Resolving => None,
            Phase::Anonymous => Some(Self::Public),
            Phase::Authenticated(_) => Some(Self::Protected),
        }
    }

    /// Redirect target for paths outside this set.
    pub fn home(self) -> AppRoute {
        match self {
            Self::Public => AppRoute::Public(PublicRoute::Login),
            Self::Protected => AppRoute::Protected(ProtectedRoute::Dashboard),
        }
    }

    /// Match `path` against this set's routes.
    pub fn lookup(self, path: &str) -> Option<AppRoute> {
        let path = normalize_path(path);
        match self {
            Self::Public => PublicRoute::ALL
                .into_iter()
                .find(|r| r.path() == path)
                .map(AppRoute::Public),
            Self::Protected => ProtectedRoute::ALL
                .into_iter()
                .find(|r| r.path() == path)
                .map(AppRoute::Protected),
        }
    }
}

/// Gate a requested path against the current session phase.
pub fn decide(phase: &Phase, path: &str) -> GateDecision {
    let Some(set) = RouteSet::for_phase(phase) else {
        return GateDecision::Loading;
    };
    match set.lookup(path) {
        Some(route) => GateDecision::Render(route),
        None => GateDecision::Redirect(set.home()),
    }
}

/// Strip query/fragment and a trailing slash (except for the root).
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

impl Display for PublicRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl Display for ProtectedRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
