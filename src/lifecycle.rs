//! Central status-transition rules for vehicles and sales, plus the
//! document-compliance predicate. Consumers must not duplicate these tables.

use chrono::NaiveDate;

use crate::errors::DealerError;
use crate::inventory::sale::SaleStatus;
use crate::inventory::vehicle::{Documents, Vehicle, VehicleStatus};

impl VehicleStatus {
    /// Legal moves: `Available ⇄ Reserved`, `Available ⇄ Maintenance`,
    /// `Available → Sold`, `Reserved → Sold`. `Sold` is terminal.
    pub fn can_transition_to(self, next: VehicleStatus) -> bool {
        use VehicleStatus::*;
        matches!(
            (self, next),
            (Available, Reserved)
                | (Available, Maintenance)
                | (Available, Sold)
                | (Reserved, Available)
                | (Reserved, Sold)
                | (Maintenance, Available)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, VehicleStatus::Sold)
    }
}

impl SaleStatus {
    /// Legal moves: `Pending → Completed`, `Pending → Cancelled`.
    pub fn can_transition_to(self, next: SaleStatus) -> bool {
        use SaleStatus::*;
        matches!((self, next), (Pending, Completed) | (Pending, Cancelled))
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, SaleStatus::Pending)
    }
}

pub fn ensure_vehicle_transition(
    from: VehicleStatus,
    to: VehicleStatus,
) -> Result<(), DealerError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(DealerError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

pub fn ensure_sale_transition(from: SaleStatus, to: SaleStatus) -> Result<(), DealerError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(DealerError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

impl Vehicle {
    /// Moves the vehicle to `next`, keeping the `sold_at ⇔ Sold` invariant:
    /// entering `Sold` stamps `sold_at` with `date`.
    pub fn transition_to(
        &mut self,
        next: VehicleStatus,
        date: NaiveDate,
    ) -> Result<(), DealerError> {
        ensure_vehicle_transition(self.status, next)?;
        self.status = next;
        if next == VehicleStatus::Sold {
            self.sold_at = Some(date);
        }
        Ok(())
    }
}

impl Documents {
    /// A vehicle is compliant when SOAT, technical review, and ownership
    /// papers are all current.
    pub fn is_complete(&self) -> bool {
        self.soat && self.technical_review && self.ownership
    }
}
