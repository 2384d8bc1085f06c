//! Dashboard statistics: a pure reduction of the full repository state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DealerError;
use crate::finance;
use crate::inventory::dealership::Dealership;
use crate::inventory::vehicle::VehicleStatus;

/// Half-open date window `[start, end)` used to scope period counters.
///
/// Fields are private so the `end > start` check in the constructors is the
/// only way to build one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DealerError> {
        if end <= start {
            return Err(DealerError::Validation(
                "period end must be after start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// The calendar month containing `year`/`month`.
    pub fn month(year: i32, month: u32) -> Result<Self, DealerError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DealerError::Validation(format!("invalid month {year}-{month:02}")))?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| DealerError::Validation(format!("invalid month {year}-{month:02}")))?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// Point-in-time totals for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    pub period: ReportPeriod,
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub sold_in_period: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_clients: usize,
    pub pending_documents: usize,
}

impl StatsSnapshot {
    /// Reduces the full record set into reportable totals. Always computed
    /// over ground truth, never over a filtered view, and carries no hidden
    /// state: identical inputs yield identical snapshots.
    pub fn collect(dealership: &Dealership, period: ReportPeriod) -> Self {
        let available_vehicles = dealership
            .vehicles
            .iter()
            .filter(|vehicle| vehicle.status == VehicleStatus::Available)
            .count();
        let pending_documents = dealership
            .vehicles
            .iter()
            .filter(|vehicle| !vehicle.documents.is_complete())
            .count();
        let sold_in_period = dealership
            .sales
            .iter()
            .filter(|sale| period.contains(sale.sale_date))
            .count();
        Self {
            period,
            total_vehicles: dealership.vehicle_count(),
            available_vehicles,
            sold_in_period,
            total_revenue: finance::total_revenue(&dealership.sales),
            total_profit: finance::total_profit(&dealership.sales),
            total_clients: dealership.client_count(),
            pending_documents,
        }
    }
}
