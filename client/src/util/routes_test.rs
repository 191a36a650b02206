use super::*;
use crate::net::types::Identity;

fn authenticated() -> Phase {
    Phase::Authenticated(Identity { id: 1, username: "alice".to_owned(), email: "a@example.com".to_owned() })
}

fn all_paths() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = PublicRoute::ALL.iter().map(|r| r.path()).collect();
    paths.extend(ProtectedRoute::ALL.iter().map(|r| r.path()));
    paths.extend(["/nope", "/login/extra", "/dashboard", ""]);
    paths
}

// =============================================================
// Disjointness
// =============================================================

#[test]
fn public_and_protected_paths_do_not_overlap() {
    for public in PublicRoute::ALL {
        assert_eq!(RouteSet::Protected.lookup(public.path()), None, "{public} leaked into protected set");
    }
    for protected in ProtectedRoute::ALL {
        assert_eq!(RouteSet::Public.lookup(protected.path()), None, "{protected} leaked into public set");
    }
}

#[test]
fn every_path_renders_in_exactly_one_set_per_phase() {
    for path in all_paths() {
        let anon = decide(&Phase::Anonymous, path);
        let auth = decide(&authenticated(), path);
        let renders_public = matches!(anon, GateDecision::Render(AppRoute::Public(_)));
        let renders_protected = matches!(auth, GateDecision::Render(AppRoute::Protected(_)));
        assert!(!matches!(anon, GateDecision::Render(AppRoute::Protected(_))), "{path}");
        assert!(!matches!(auth, GateDecision::Render(AppRoute::Public(_))), "{path}");
        assert!(!(renders_public && renders_protected), "{path} reachable from both sets");
    }
}

// =============================================================
// decide
// =============================================================

#[test]
fn resolving_always_loads() {
    for path in all_paths() {
        assert_eq!(decide(&Phase::Resolving, path), GateDecision::Loading);
    }
}

#[test]
fn anonymous_renders_public_routes() {
    assert_eq!(decide(&Phase::Anonymous, "/register"), GateDecision::Render(AppRoute::Public(PublicRoute::Register)));
    assert_eq!(
        decide(&Phase::Anonymous, "/oauth2/callback?userId=7"),
        GateDecision::Render(AppRoute::Public(PublicRoute::OAuthCallback))
    );
}

#[test]
fn anonymous_redirects_everything_else_to_login() {
    for path in ["/", "/expenses", "/stats", "/whatever"] {
        assert_eq!(decide(&Phase::Anonymous, path), GateDecision::Redirect(AppRoute::Public(PublicRoute::Login)));
    }
}

#[test]
fn authenticated_renders_protected_routes() {
    assert_eq!(decide(&authenticated(), "/"), GateDecision::Render(AppRoute::Protected(ProtectedRoute::Dashboard)));
    assert_eq!(
        decide(&authenticated(), "/thresholds/"),
        GateDecision::Render(AppRoute::Protected(ProtectedRoute::Thresholds))
    );
}

#[test]
fn authenticated_redirects_everything_else_to_root() {
    for path in ["/login", "/register", "/oauth2/callback", "/unknown"] {
        assert_eq!(
            decide(&authenticated(), path),
            GateDecision::Redirect(AppRoute::Protected(ProtectedRoute::Dashboard))
        );
    }
}

// =============================================================
// Paths and labels
// =============================================================

#[test]
fn display_matches_path() {
    assert_eq!(PublicRoute::OAuthCallback.to_string(), "/oauth2/callback");
    assert_eq!(AppRoute::Protected(ProtectedRoute::Statistics).to_string(), "/stats");
}

#[test]
fn thresholds_title_differs_from_sidebar_label() {
    assert_eq!(ProtectedRoute::Thresholds.label(), "Alerts");
    assert_eq!(ProtectedRoute::Thresholds.title(), "Thresholds & Alerts");
    assert_eq!(ProtectedRoute::Expenses.title(), "Expenses");
}

#[test]
fn route_set_home_belongs_to_the_set() {
    for set in [RouteSet::Public, RouteSet::Protected] {
        assert_eq!(set.home().set(), set);
        assert_eq!(set.lookup(set.home().path()), Some(set.home()));
    }
}
