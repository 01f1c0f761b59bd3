use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use folio_shared_contracts::time::TimeService;

/// System clock, truncated to whole milliseconds so that timestamps survive
/// a round trip through their ISO-8601 representation unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(now)
    }
}
