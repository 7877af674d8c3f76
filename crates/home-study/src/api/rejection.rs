use crate::access::{authorize, GuardResult, Role, SessionHeaders};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Guard decision other than `Allow`, rendered as 401 or 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessDenied(pub GuardResult);

impl IntoResponse for AccessDenied {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            GuardResult::RedirectToRoleHome(_) => {
                (StatusCode::FORBIDDEN, "role not permitted for this resource")
            }
            GuardResult::RedirectToLogin | GuardResult::Allow => {
                (StatusCode::UNAUTHORIZED, "authentication required")
            }
        };

        let payload = json!({
            "error": message,
            "redirect": self.0.redirect_path(),
        });
        (status, Json(payload)).into_response()
    }
}

pub(crate) fn require(
    headers: &SessionHeaders,
    allowed_roles: &[Role],
    resource: &'static str,
) -> Result<(), AccessDenied> {
    let decision = authorize(headers.session(), allowed_roles);
    if decision.is_allowed() {
        return Ok(());
    }

    tracing::debug!(
        resource,
        decision = decision.label(),
        role = headers.session().map(|session| session.role.label()),
        "request denied by access guard"
    );
    Err(AccessDenied(decision))
}

pub(crate) fn unprocessable(error: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
