//! Role-based navigation guard.

pub mod domain;
pub mod guard;
pub mod routes;
pub mod session;

pub use domain::{Role, Session, UserId};
pub use guard::{authorize, GuardResult, LOGIN_PATH};
pub use routes::{guard_navigation, ViewRoute};
pub use session::SessionHeaders;
