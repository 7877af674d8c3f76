mod rejection;
mod requests;
pub mod router;

#[cfg(test)]
mod tests;

use crate::clock::{Clock, SystemClock};
use crate::roster::RosterOrdering;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub use rejection::AccessDenied;
pub use router::regime_router;

/// Shared handler state: the clock used when a request names no `today`,
/// and the ordering applied when it names none.
#[derive(Clone)]
pub struct ApiState {
    clock: Arc<dyn Clock>,
    pub ordering: RosterOrdering,
}

impl ApiState {
    pub fn new(clock: Arc<dyn Clock>, ordering: RosterOrdering) -> Self {
        Self { clock, ordering }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), RosterOrdering::default())
    }
}
