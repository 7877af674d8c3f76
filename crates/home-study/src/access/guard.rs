use super::domain::{Role, Session};

/// Navigation decision for a guarded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardResult {
    Allow,
    RedirectToLogin,
    RedirectToRoleHome(Role),
}

pub const LOGIN_PATH: &str = "/login";

impl GuardResult {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToRoleHome(role) => Some(role.home_path().unwrap_or(LOGIN_PATH)),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::RedirectToLogin => "redirect_to_login",
            Self::RedirectToRoleHome(_) => "redirect_to_role_home",
        }
    }
}

/// Decide whether `session` may open a view restricted to `allowed_roles`.
///
/// An empty `allowed_roles` means any authenticated session is let through.
/// A role outside the allowed set is sent to its own home view, or to the
/// login view when it has none.
pub fn authorize(session: Option<&Session>, allowed_roles: &[Role]) -> GuardResult {
    let Some(session) = session else {
        return GuardResult::RedirectToLogin;
    };

    if !allowed_roles.is_empty() && !allowed_roles.contains(&session.role) {
        return match session.role.home_path() {
            Some(_) => GuardResult::RedirectToRoleHome(session.role),
            None => GuardResult::RedirectToLogin,
        };
    }

    GuardResult::Allow
}
