//! Sale recording and the three-record completion transaction.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::errors::DealerError;
use crate::inventory::common::Displayable;
use crate::inventory::dealership::Dealership;
use crate::inventory::sale::{PaymentMethod, Sale, SaleStatus, Warranty};
use crate::inventory::vehicle::VehicleStatus;
use crate::lifecycle::{ensure_sale_transition, ensure_vehicle_transition};

/// Input for recording a sale. Advisor defaults to unassigned.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub vehicle_id: Uuid,
    pub client_id: Uuid,
    pub sale_price: f64,
    pub payment_method: PaymentMethod,
    pub warranty: Warranty,
    pub sale_date: NaiveDate,
    pub advisor_id: String,
}

impl SaleDraft {
    pub fn new(
        vehicle_id: Uuid,
        client_id: Uuid,
        sale_price: f64,
        payment_method: PaymentMethod,
        warranty: Warranty,
        sale_date: NaiveDate,
    ) -> Self {
        Self {
            vehicle_id,
            client_id,
            sale_price,
            payment_method,
            warranty,
            sale_date,
            advisor_id: String::new(),
        }
    }

    pub fn with_advisor(mut self, advisor_id: impl Into<String>) -> Self {
        self.advisor_id = advisor_id.into();
        self
    }
}

/// Orchestrates the sale lifecycle over the dealership record set.
pub struct SaleService;

impl SaleService {
    /// Records a new pending sale against an existing vehicle and client.
    ///
    /// The stored profit is captured here, against the vehicle's purchase
    /// price at recording time. Validation happens before any mutation, so a
    /// rejected draft leaves the record set unchanged.
    pub fn record(dealership: &mut Dealership, draft: SaleDraft) -> ServiceResult<Sale> {
        if draft.sale_price <= 0.0 {
            return Err(DealerError::Validation("sale price must be positive".into()));
        }
        let vehicle = dealership.vehicle(draft.vehicle_id).ok_or_else(|| {
            DealerError::Reference(format!("vehicle {} does not exist", draft.vehicle_id))
        })?;
        if dealership.client(draft.client_id).is_none() {
            return Err(DealerError::Reference(format!(
                "client {} does not exist",
                draft.client_id
            )));
        }
        if vehicle.status == VehicleStatus::Sold {
            return Err(DealerError::Validation(format!(
                "vehicle {} is already sold",
                draft.vehicle_id
            )));
        }

        let profit = draft.sale_price - vehicle.purchase_price;
        if profit < 0.0 {
            tracing::warn!(
                vehicle_id = %draft.vehicle_id,
                sale_price = draft.sale_price,
                "recording sale below purchase price"
            );
        }
        let sale = Sale::new(
            draft.vehicle_id,
            draft.client_id,
            draft.sale_price,
            profit,
            draft.payment_method,
            draft.sale_date,
            draft.warranty,
        )
        .with_advisor(draft.advisor_id);
        let recorded = sale.clone();
        dealership.add_sale(sale);
        tracing::info!(sale = %recorded.display_label(), "sale recorded");
        Ok(recorded)
    }

    /// Looks up a sale by id.
    pub fn get(dealership: &Dealership, id: Uuid) -> ServiceResult<&Sale> {
        dealership
            .sale(id)
            .ok_or_else(|| DealerError::not_found("sale", id))
    }

    /// Returns all sales in insertion order.
    pub fn list(dealership: &Dealership) -> Vec<&Sale> {
        dealership.sales.iter().collect()
    }

    /// Completes a pending sale: the sale moves to `Completed`, the vehicle
    /// to `Sold` with `sold_at` stamped, and the sale id is appended to the
    /// client's purchase history. All checks run before the first write, so
    /// readers observe either none or all three mutations.
    pub fn complete(
        dealership: &mut Dealership,
        sale_id: Uuid,
        completed_on: NaiveDate,
    ) -> ServiceResult<()> {
        let sale = dealership
            .sale(sale_id)
            .ok_or_else(|| DealerError::not_found("sale", sale_id))?;
        ensure_sale_transition(sale.status, SaleStatus::Completed)?;
        let vehicle_id = sale.vehicle_id;
        let client_id = sale.client_id;

        let vehicle = dealership.vehicle(vehicle_id).ok_or_else(|| {
            DealerError::Reference(format!("vehicle {vehicle_id} does not exist"))
        })?;
        ensure_vehicle_transition(vehicle.status, VehicleStatus::Sold)?;
        if dealership
            .sales
            .iter()
            .any(|other| other.vehicle_id == vehicle_id && other.status == SaleStatus::Completed)
        {
            return Err(DealerError::Validation(format!(
                "vehicle {vehicle_id} already has a completed sale"
            )));
        }
        if dealership.client(client_id).is_none() {
            return Err(DealerError::Reference(format!(
                "client {client_id} does not exist"
            )));
        }

        if let Some(sale) = dealership.sale_mut(sale_id) {
            sale.status = SaleStatus::Completed;
        }
        if let Some(vehicle) = dealership.vehicle_mut(vehicle_id) {
            vehicle.transition_to(VehicleStatus::Sold, completed_on)?;
        }
        if let Some(client) = dealership.client_mut(client_id) {
            client.purchase_history.push(sale_id);
        }
        dealership.touch();
        tracing::info!(id = %sale_id, vehicle_id = %vehicle_id, "sale completed");
        Ok(())
    }

    /// Cancels a pending sale. No effect on the vehicle or client.
    pub fn cancel(dealership: &mut Dealership, sale_id: Uuid) -> ServiceResult<()> {
        let sale = dealership
            .sale(sale_id)
            .ok_or_else(|| DealerError::not_found("sale", sale_id))?;
        ensure_sale_transition(sale.status, SaleStatus::Cancelled)?;
        if let Some(sale) = dealership.sale_mut(sale_id) {
            sale.status = SaleStatus::Cancelled;
        }
        dealership.touch();
        tracing::info!(id = %sale_id, "sale cancelled");
        Ok(())
    }
}
