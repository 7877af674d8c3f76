use super::domain::{Role, Session};
use super::guard::{authorize, GuardResult};

/// Client views known to the navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRoute {
    Login,
    Root,
    CoordinatorDashboard,
    ProfileManagement,
    TeacherDashboard,
    OwnProfile,
    Unknown,
}

impl ViewRoute {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Root,
            "/login" => Self::Login,
            "/coordinator" => Self::CoordinatorDashboard,
            "/perfis" => Self::ProfileManagement,
            "/teacher" => Self::TeacherDashboard,
            "/perfil" => Self::OwnProfile,
            _ => Self::Unknown,
        }
    }

    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Login => Some("/login"),
            Self::Root => Some("/"),
            Self::CoordinatorDashboard => Some("/coordinator"),
            Self::ProfileManagement => Some("/perfis"),
            Self::TeacherDashboard => Some("/teacher"),
            Self::OwnProfile => Some("/perfil"),
            Self::Unknown => None,
        }
    }

    pub const fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::CoordinatorDashboard | Self::ProfileManagement => &[Role::Coordinator],
            Self::TeacherDashboard | Self::OwnProfile => &[Role::Teacher],
            Self::Login | Self::Root | Self::Unknown => &[],
        }
    }
}

/// Resolve `path` and apply the guard for its view.
///
/// `/login` is always reachable; the root and unknown paths fall back to the login view.
pub fn guard_navigation(session: Option<&Session>, path: &str) -> GuardResult {
    match ViewRoute::from_path(path) {
        ViewRoute::Login => GuardResult::Allow,
        ViewRoute::Root | ViewRoute::Unknown => GuardResult::RedirectToLogin,
        route => authorize(session, route.allowed_roles()),
    }
}
