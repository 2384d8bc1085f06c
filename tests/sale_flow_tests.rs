use std::thread;

use chrono::NaiveDate;
use dealer_core::{
    core::services::SaleDraft,
    errors::DealerError,
    fixtures,
    inventory::{
        sale::{PaymentMethod, SaleStatus, Warranty},
        vehicle::VehicleStatus,
    },
    stats::ReportPeriod,
    store::SharedDealership,
};

fn june() -> ReportPeriod {
    ReportPeriod::month(2024, 6).unwrap()
}

#[test]
fn completed_sale_flows_through_vehicle_client_and_dashboard() {
    let store = SharedDealership::new(fixtures::sample_dealership());
    let before = store.dashboard_stats(june());

    let (vehicle_id, client_id) = store.with_snapshot(|dealership| {
        (dealership.vehicles[0].id, dealership.clients[1].id)
    });
    let sale_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let sale = store
        .record_sale(
            SaleDraft::new(
                vehicle_id,
                client_id,
                18_500_000.0,
                PaymentMethod::Cash,
                Warranty::new(6, ["Motor"]),
                sale_date,
            )
            .with_advisor("1"),
        )
        .unwrap();
    store.complete_sale(sale.id, sale_date).unwrap();

    store.with_snapshot(|dealership| {
        let vehicle = dealership.vehicle(vehicle_id).unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Sold);
        assert_eq!(vehicle.sold_at, Some(sale_date));
        let client = dealership.client(client_id).unwrap();
        assert!(client.purchase_history.contains(&sale.id));
    });

    let after = store.dashboard_stats(june());
    assert_eq!(after.sold_in_period, before.sold_in_period + 1);
}

#[test]
fn selling_a_sold_vehicle_is_rejected() {
    let store = SharedDealership::new(fixtures::sample_dealership());
    let sold_id = store
        .list_vehicles()
        .into_iter()
        .find(|vehicle| vehicle.status == VehicleStatus::Sold)
        .expect("fixture contains a sold vehicle")
        .id;

    let err = store
        .update_vehicle_status(
            sold_id,
            VehicleStatus::Available,
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        )
        .expect_err("sold is terminal");
    assert!(matches!(err, DealerError::InvalidTransition { .. }));
}

#[test]
fn record_sale_with_unknown_vehicle_fails_and_changes_nothing() {
    let store = SharedDealership::new(fixtures::sample_dealership());
    let before = store.list_sales().len();
    let client_id = store.list_clients()[0].id;

    let err = store
        .record_sale(SaleDraft::new(
            uuid::Uuid::new_v4(),
            client_id,
            10_000_000.0,
            PaymentMethod::Cash,
            Warranty::default(),
            NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
        ))
        .expect_err("unknown vehicle");
    assert!(matches!(err, DealerError::Reference(_)));
    assert_eq!(store.list_sales().len(), before);
}

#[test]
fn cancelled_sale_has_no_side_effects() {
    let store = SharedDealership::new(fixtures::sample_dealership());
    let (vehicle_id, client_id) = store.with_snapshot(|dealership| {
        (dealership.vehicles[1].id, dealership.clients[2].id)
    });
    let sale = store
        .record_sale(SaleDraft::new(
            vehicle_id,
            client_id,
            14_200_000.0,
            PaymentMethod::Financing,
            Warranty::new(3, ["Motor"]),
            NaiveDate::from_ymd_opt(2024, 6, 25).unwrap(),
        ))
        .unwrap();
    store.cancel_sale(sale.id).unwrap();

    store.with_snapshot(|dealership| {
        assert_eq!(dealership.sale(sale.id).unwrap().status, SaleStatus::Cancelled);
        assert_eq!(dealership.vehicle(vehicle_id).unwrap().status, VehicleStatus::Available);
        assert!(dealership.client(client_id).unwrap().purchase_history.is_empty());
    });
}

#[test]
fn readers_never_observe_a_partial_completion() {
    let store = SharedDealership::new(fixtures::sample_dealership());
    let (vehicle_id, client_id) = store.with_snapshot(|dealership| {
        (dealership.vehicles[0].id, dealership.clients[0].id)
    });
    let sale_date = NaiveDate::from_ymd_opt(2024, 6, 18).unwrap();
    let sale = store
        .record_sale(SaleDraft::new(
            vehicle_id,
            client_id,
            18_500_000.0,
            PaymentMethod::Cash,
            Warranty::default(),
            sale_date,
        ))
        .unwrap();

    let writer = {
        let store = store.clone();
        let sale_id = sale.id;
        thread::spawn(move || store.complete_sale(sale_id, sale_date))
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            let sale_id = sale.id;
            thread::spawn(move || {
                for _ in 0..200 {
                    store.with_snapshot(|dealership| {
                        let sale = dealership.sale(sale_id).unwrap();
                        let vehicle = dealership.vehicle(sale.vehicle_id).unwrap();
                        let client = dealership.client(sale.client_id).unwrap();
                        let completed = sale.status == SaleStatus::Completed;
                        assert_eq!(completed, vehicle.status == VehicleStatus::Sold);
                        assert_eq!(completed, client.purchase_history.contains(&sale_id));
                    });
                }
            })
        })
        .collect();

    writer.join().unwrap().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}
