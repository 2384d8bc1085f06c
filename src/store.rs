//! Shared, thread-safe access to one dealership record set.
//!
//! Single-writer, many-reader: every mutation runs under one write guard, so
//! the three-record sale-completion transaction is observed atomically.
//! Readers see either the pre- or post-transition state, never a mix.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::{
    ClientPatch, ClientService, SaleDraft, SaleService, ServiceResult, StatsService, VehiclePatch,
    VehicleService,
};
use crate::inventory::client::Client;
use crate::inventory::dealership::Dealership;
use crate::inventory::sale::Sale;
use crate::inventory::vehicle::{Vehicle, VehicleStatus};
use crate::search;
use crate::stats::{ReportPeriod, StatsSnapshot};

/// Clonable handle to the canonical dealership state.
#[derive(Debug, Clone)]
pub struct SharedDealership {
    inner: Arc<RwLock<Dealership>>,
}

impl SharedDealership {
    pub fn new(dealership: Dealership) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dealership)),
        }
    }

    // Service mutations are all-or-nothing, so the state behind a poisoned
    // lock is still consistent and can be handed out.
    fn read(&self) -> RwLockReadGuard<'_, Dealership> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Dealership> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list_vehicles(&self) -> Vec<Vehicle> {
        self.read().vehicles.clone()
    }

    pub fn list_clients(&self) -> Vec<Client> {
        self.read().clients.clone()
    }

    pub fn list_sales(&self) -> Vec<Sale> {
        self.read().sales.clone()
    }

    pub fn search_vehicles(&self, term: &str) -> Vec<Vehicle> {
        let guard = self.read();
        search::search(&guard.vehicles, term).into_iter().cloned().collect()
    }

    pub fn search_clients(&self, term: &str) -> Vec<Client> {
        let guard = self.read();
        search::search(&guard.clients, term).into_iter().cloned().collect()
    }

    pub fn create_vehicle(&self, vehicle: Vehicle) -> ServiceResult<Uuid> {
        VehicleService::create(&mut self.write(), vehicle)
    }

    pub fn update_vehicle(&self, id: Uuid, patch: VehiclePatch) -> ServiceResult<Vehicle> {
        VehicleService::update(&mut self.write(), id, patch)
    }

    pub fn update_vehicle_status(
        &self,
        id: Uuid,
        next: VehicleStatus,
        date: NaiveDate,
    ) -> ServiceResult<()> {
        VehicleService::update_status(&mut self.write(), id, next, date)
    }

    pub fn create_client(&self, client: Client) -> ServiceResult<Uuid> {
        ClientService::create(&mut self.write(), client)
    }

    pub fn update_client(&self, id: Uuid, patch: ClientPatch) -> ServiceResult<Client> {
        ClientService::update(&mut self.write(), id, patch)
    }

    pub fn record_sale(&self, draft: SaleDraft) -> ServiceResult<Sale> {
        SaleService::record(&mut self.write(), draft)
    }

    pub fn complete_sale(&self, sale_id: Uuid, completed_on: NaiveDate) -> ServiceResult<()> {
        SaleService::complete(&mut self.write(), sale_id, completed_on)
    }

    pub fn cancel_sale(&self, sale_id: Uuid) -> ServiceResult<()> {
        SaleService::cancel(&mut self.write(), sale_id)
    }

    pub fn dashboard_stats(&self, period: ReportPeriod) -> StatsSnapshot {
        StatsService::dashboard(&self.read(), period)
    }

    pub fn vehicle_profit(&self, id: Uuid) -> ServiceResult<f64> {
        VehicleService::profit(&self.read(), id)
    }

    pub fn vehicle_margin(&self, id: Uuid) -> ServiceResult<f64> {
        VehicleService::margin(&self.read(), id)
    }

    /// Runs `f` with read access to the full record set, for callers that
    /// need more than one consistent view at a time.
    pub fn with_snapshot<T>(&self, f: impl FnOnce(&Dealership) -> T) -> T {
        f(&self.read())
    }
}

impl Default for SharedDealership {
    fn default() -> Self {
        Self::new(Dealership::new("dealership"))
    }
}
