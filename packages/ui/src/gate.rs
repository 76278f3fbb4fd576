//! Route gate: decides which screen a session may see.
//!
//! [`decide`] is the only place that interprets a [`Session`] for routing.
//! Both the onboarding routes and the protected routes go through
//! [`resolve`], which is built on it, so the two can never disagree.

use api::Role;

use crate::session::Session;

/// Where navigation is allowed to go for a settled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    ShowLogin,
    ShowRoleSelection,
    ShowDashboard,
}

/// Classify a session. Callers must show a loading placeholder instead of
/// consulting this while `session.loading` is set.
///
/// An "authenticated" session without a user fails closed to `ShowLogin`.
pub fn decide(session: &Session) -> RouteDecision {
    let user = match (&session.user, session.is_authenticated) {
        (Some(user), true) => user,
        _ => return RouteDecision::ShowLogin,
    };
    match user.role {
        None | Some(Role::Unassigned) => RouteDecision::ShowRoleSelection,
        Some(_) => RouteDecision::ShowDashboard,
    }
}

/// Fixed redirect destinations of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    RoleSelection,
    Dashboard,
    /// Authorization failure: signed in and onboarded, but the wrong role.
    Unauthorized,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::RoleSelection => "/select-role",
            RedirectTarget::Dashboard => "/dashboard",
            RedirectTarget::Unauthorized => "/unauthorized",
        }
    }
}

/// What a route demands of the session before it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Anyone, in any state.
    Public,
    /// Only signed-out visitors (the login screen).
    Anonymous,
    /// Signed in but no role yet.
    Onboarding,
    /// Signed in, onboarded, and holding one of these roles.
    Roles(&'static [Role]),
}

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Loading,
    Render,
    Redirect(RedirectTarget),
}

pub fn resolve(requirement: RouteRequirement, session: &Session) -> Resolution {
    use RedirectTarget::*;
    use RouteDecision::*;

    if session.loading {
        return Resolution::Loading;
    }
    let decision = decide(session);
    match (requirement, decision) {
        (RouteRequirement::Public, _) => Resolution::Render,

        (RouteRequirement::Anonymous, ShowLogin) => Resolution::Render,
        (RouteRequirement::Anonymous, ShowRoleSelection) => Resolution::Redirect(RoleSelection),
        (RouteRequirement::Anonymous, ShowDashboard) => Resolution::Redirect(Dashboard),

        (RouteRequirement::Onboarding, ShowRoleSelection) => Resolution::Render,
        (RouteRequirement::Onboarding, ShowDashboard) => Resolution::Redirect(Dashboard),
        (RouteRequirement::Onboarding, ShowLogin) => Resolution::Redirect(Login),

        (RouteRequirement::Roles(_), ShowLogin) => Resolution::Redirect(Login),
        (RouteRequirement::Roles(_), ShowRoleSelection) => Resolution::Redirect(RoleSelection),
        (RouteRequirement::Roles(allowed), ShowDashboard) => {
            let role = session.user.as_ref().and_then(|u| u.role);
            if role.is_some_and(|r| allowed.contains(&r)) {
                Resolution::Render
            } else {
                Resolution::Redirect(Unauthorized)
            }
        }
    }
}
