//! Validated CRUD and lifecycle helpers for vehicle listings.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::errors::DealerError;
use crate::finance;
use crate::inventory::common::Displayable;
use crate::inventory::dealership::Dealership;
use crate::inventory::vehicle::{Documents, Vehicle, VehicleCondition, VehicleStatus};
use crate::lifecycle::ensure_vehicle_transition;

/// Provides validated CRUD helpers for the vehicle collection.
pub struct VehicleService;

impl VehicleService {
    /// Adds a new listing and returns its identifier.
    ///
    /// Listings always enter the lot as `Available`; sold state is only
    /// reachable through the lifecycle transitions.
    pub fn create(dealership: &mut Dealership, vehicle: Vehicle) -> ServiceResult<Uuid> {
        if vehicle.status != VehicleStatus::Available {
            return Err(DealerError::Validation(
                "new vehicles must be created as available".into(),
            ));
        }
        Self::validate(&vehicle)?;
        if finance::profit(&vehicle) < 0.0 {
            tracing::warn!(
                brand = %vehicle.brand,
                model = %vehicle.model,
                price = vehicle.price,
                purchase_price = vehicle.purchase_price,
                "listing with negative expected profit"
            );
        }
        tracing::debug!(vehicle = %vehicle.display_label(), "vehicle created");
        Ok(dealership.add_vehicle(vehicle))
    }

    /// Looks up a listing by id.
    pub fn get(dealership: &Dealership, id: Uuid) -> ServiceResult<&Vehicle> {
        dealership
            .vehicle(id)
            .ok_or_else(|| DealerError::not_found("vehicle", id))
    }

    /// Returns all listings in insertion order.
    pub fn list(dealership: &Dealership) -> Vec<&Vehicle> {
        dealership.vehicles.iter().collect()
    }

    /// Applies `patch` to the listing identified by `id` and returns the
    /// updated record.
    ///
    /// The patch is validated against the would-be result before anything is
    /// written back, so a rejected update leaves the record untouched.
    pub fn update(
        dealership: &mut Dealership,
        id: Uuid,
        patch: VehiclePatch,
    ) -> ServiceResult<Vehicle> {
        let current = dealership
            .vehicle(id)
            .ok_or_else(|| DealerError::not_found("vehicle", id))?;

        let mut updated = current.clone();
        patch.apply(&mut updated);
        Self::validate(&updated)?;
        if updated.status != current.status {
            ensure_vehicle_transition(current.status, updated.status)?;
        }

        if let Some(vehicle) = dealership.vehicle_mut(id) {
            *vehicle = updated.clone();
        }
        dealership.touch();
        Ok(updated)
    }

    /// Moves the listing to `next` on `date`, enforcing the transition table.
    pub fn update_status(
        dealership: &mut Dealership,
        id: Uuid,
        next: VehicleStatus,
        date: NaiveDate,
    ) -> ServiceResult<()> {
        let vehicle = dealership
            .vehicle_mut(id)
            .ok_or_else(|| DealerError::not_found("vehicle", id))?;
        vehicle.transition_to(next, date)?;
        tracing::info!(id = %id, status = %next, "vehicle status updated");
        dealership.touch();
        Ok(())
    }

    /// Signed listing profit for the vehicle identified by `id`.
    pub fn profit(dealership: &Dealership, id: Uuid) -> ServiceResult<f64> {
        Self::get(dealership, id).map(finance::profit)
    }

    /// Profit margin for the vehicle identified by `id`.
    pub fn margin(dealership: &Dealership, id: Uuid) -> ServiceResult<f64> {
        Self::get(dealership, id).and_then(finance::profit_margin)
    }

    fn validate(vehicle: &Vehicle) -> ServiceResult<()> {
        if vehicle.brand.trim().is_empty() || vehicle.model.trim().is_empty() {
            return Err(DealerError::Validation(
                "brand and model are required".into(),
            ));
        }
        if vehicle.price <= 0.0 {
            return Err(DealerError::Validation("price must be positive".into()));
        }
        if vehicle.purchase_price <= 0.0 {
            return Err(DealerError::Validation(
                "purchase price must be positive".into(),
            ));
        }
        let sold = vehicle.status == VehicleStatus::Sold;
        if sold != vehicle.sold_at.is_some() {
            return Err(DealerError::Validation(
                "sold_at must be set exactly when status is sold".into(),
            ));
        }
        Ok(())
    }
}

/// Partial update for a vehicle listing. Absent fields keep their value.
///
/// `sold_at` uses a nested `Option` so a patch can clear the date explicitly.
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub mileage: Option<u32>,
    pub price: Option<f64>,
    pub purchase_price: Option<f64>,
    pub color: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub condition: Option<VehicleCondition>,
    pub status: Option<VehicleStatus>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub last_maintenance: Option<NaiveDate>,
    pub documents: Option<Documents>,
    pub sold_at: Option<Option<NaiveDate>>,
}

impl VehiclePatch {
    fn apply(self, vehicle: &mut Vehicle) {
        if let Some(mileage) = self.mileage {
            vehicle.mileage = mileage;
        }
        if let Some(price) = self.price {
            vehicle.price = price;
        }
        if let Some(purchase_price) = self.purchase_price {
            vehicle.purchase_price = purchase_price;
        }
        if let Some(color) = self.color {
            vehicle.color = color;
        }
        if let Some(fuel) = self.fuel {
            vehicle.fuel = fuel;
        }
        if let Some(transmission) = self.transmission {
            vehicle.transmission = transmission;
        }
        if let Some(condition) = self.condition {
            vehicle.condition = condition;
        }
        if let Some(status) = self.status {
            vehicle.status = status;
        }
        if let Some(description) = self.description {
            vehicle.description = description;
        }
        if let Some(features) = self.features {
            vehicle.features = features;
        }
        if let Some(images) = self.images {
            vehicle.images = images;
        }
        if let Some(last_maintenance) = self.last_maintenance {
            vehicle.last_maintenance = last_maintenance;
        }
        if let Some(documents) = self.documents {
            vehicle.documents = documents;
        }
        if let Some(sold_at) = self.sold_at {
            vehicle.sold_at = sold_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dealership() -> Dealership {
        Dealership::new("Vehicles")
    }

    fn sample_vehicle() -> Vehicle {
        Vehicle::new("Toyota", "Corolla", 2020, 18_500_000.0, 16_000_000.0)
    }

    #[test]
    fn create_rejects_non_positive_prices() {
        let mut dealership = base_dealership();
        let vehicle = Vehicle::new("Toyota", "Corolla", 2020, 0.0, 16_000_000.0);
        let err = VehicleService::create(&mut dealership, vehicle)
            .expect_err("zero price must be rejected");
        assert!(matches!(err, DealerError::Validation(_)));
        assert_eq!(dealership.vehicle_count(), 0);
    }

    #[test]
    fn update_rejects_sold_status_without_date() {
        let mut dealership = base_dealership();
        let id = VehicleService::create(&mut dealership, sample_vehicle()).unwrap();

        let patch = VehiclePatch {
            status: Some(VehicleStatus::Sold),
            ..VehiclePatch::default()
        };
        let err = VehicleService::update(&mut dealership, id, patch)
            .expect_err("sold without sold_at must fail");
        assert!(matches!(err, DealerError::Validation(_)));
        assert_eq!(
            VehicleService::get(&dealership, id).unwrap().status,
            VehicleStatus::Available
        );
    }

    #[test]
    fn update_returns_the_updated_listing() {
        let mut dealership = base_dealership();
        let id = VehicleService::create(&mut dealership, sample_vehicle()).unwrap();

        let patch = VehiclePatch {
            mileage: Some(46_500),
            price: Some(18_900_000.0),
            ..VehiclePatch::default()
        };
        let updated = VehicleService::update(&mut dealership, id, patch).unwrap();
        assert_eq!(updated.mileage, 46_500);
        assert_eq!(updated.price, 18_900_000.0);
        assert_eq!(VehicleService::get(&dealership, id).unwrap(), &updated);
    }

    #[test]
    fn update_fails_for_missing_vehicle() {
        let mut dealership = base_dealership();
        let err = VehicleService::update(&mut dealership, Uuid::new_v4(), VehiclePatch::default())
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, DealerError::NotFound { .. }));
    }

    #[test]
    fn update_status_walks_the_transition_table() {
        let mut dealership = base_dealership();
        let id = VehicleService::create(&mut dealership, sample_vehicle()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        VehicleService::update_status(&mut dealership, id, VehicleStatus::Reserved, date).unwrap();
        VehicleService::update_status(&mut dealership, id, VehicleStatus::Sold, date).unwrap();
        let vehicle = VehicleService::get(&dealership, id).unwrap();
        assert_eq!(vehicle.sold_at, Some(date));

        let err =
            VehicleService::update_status(&mut dealership, id, VehicleStatus::Available, date)
                .expect_err("sold is terminal");
        assert!(matches!(err, DealerError::InvalidTransition { .. }));
    }

    #[test]
    fn profit_and_margin_surface_finance_results() {
        let mut dealership = base_dealership();
        let id = VehicleService::create(&mut dealership, sample_vehicle()).unwrap();
        assert_eq!(VehicleService::profit(&dealership, id).unwrap(), 2_500_000.0);
        let margin = VehicleService::margin(&dealership, id).unwrap();
        assert!((margin - 0.15625).abs() < 1e-12);
        assert!(matches!(
            VehicleService::profit(&dealership, Uuid::new_v4()),
            Err(DealerError::NotFound { .. })
        ));
    }
}
