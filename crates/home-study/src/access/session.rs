use super::domain::{Role, Session, UserId};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use std::convert::Infallible;

pub const ROLE_HEADER: &str = "x-session-role";
pub const USER_HEADER: &str = "x-session-user";
pub const NAME_HEADER: &str = "x-session-name";

/// Session forwarded by the auth provider in request headers.
///
/// Requests without a role header carry no session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHeaders(pub Option<Session>);

impl SessionHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(role) = header_value(headers, ROLE_HEADER) else {
            return Self(None);
        };

        Self(Some(Session {
            user_id: header_value(headers, USER_HEADER).map(UserId::new),
            name: header_value(headers, NAME_HEADER).unwrap_or_default(),
            role: Role::parse(&role),
        }))
    }

    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
