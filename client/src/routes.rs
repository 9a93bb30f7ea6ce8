//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route declares whether it needs a session, must be visited without
//! one, or is open to everyone. `evaluate` is consulted on each navigation by
//! the `Guarded` component, so a logout or a 401 eviction blocks protected
//! pages immediately.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos_router::NavigateOptions;

/// Canonical sign-in route.
pub const LOGIN_PATH: &str = "/login";
/// Landing route for an authenticated user.
pub const DEFAULT_PATH: &str = "/";

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresAuth,
    GuestOnly,
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    /// Navigation options for carrying out this decision. A redirect
    /// replaces the blocked entry so it never lands in history.
    pub fn navigate_options(self) -> NavigateOptions {
        NavigateOptions { replace: matches!(self, Self::Redirect(_)), ..NavigateOptions::default() }
    }
}

/// Decide whether a navigation may proceed.
///
/// Order matters: the auth requirement is checked before the guest-only rule.
pub fn evaluate(access: Access, authenticated: bool) -> GuardDecision {
    match access {
        Access::RequiresAuth if !authenticated => GuardDecision::Redirect(LOGIN_PATH),
        Access::GuestOnly if authenticated => GuardDecision::Redirect(DEFAULT_PATH),
        _ => GuardDecision::Allow,
    }
}

/// Named application routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    MyGames,
    Wishlist,
    Plays,
}

impl AppRoute {
    pub const ALL: [Self; 5] = [Self::Login, Self::Register, Self::MyGames, Self::Wishlist, Self::Plays];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => "/register",
            Self::MyGames => DEFAULT_PATH,
            Self::Wishlist => "/wishlist",
            Self::Plays => "/plays",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Login | Self::Register => Access::GuestOnly,
            Self::MyGames | Self::Wishlist | Self::Plays => Access::RequiresAuth,
        }
    }

    /// Match a browser path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { DEFAULT_PATH } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Guard decision for navigating to this route.
    pub fn guard(self, authenticated: bool) -> GuardDecision {
        evaluate(self.access(), authenticated)
    }
}
