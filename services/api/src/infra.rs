use chrono::NaiveDateTime;
use home_study::roster::dates::parse_timestamp;
use home_study::roster::RosterOrdering;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_today(raw: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(raw)
        .ok_or_else(|| format!("failed to parse '{raw}' as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"))
}

pub(crate) fn parse_ordering(raw: &str) -> Result<RosterOrdering, String> {
    RosterOrdering::parse(raw).ok_or_else(|| {
        format!("unknown ordering '{raw}' (expected status_first, deadline_first or as_provided)")
    })
}
