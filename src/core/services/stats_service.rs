//! Dashboard statistics entry point.

use crate::inventory::dealership::Dealership;
use crate::stats::{ReportPeriod, StatsSnapshot};

pub struct StatsService;

impl StatsService {
    /// Reduces the full record set into the dashboard snapshot for `period`.
    pub fn dashboard(dealership: &Dealership, period: ReportPeriod) -> StatsSnapshot {
        StatsSnapshot::collect(dealership, period)
    }
}
