use chrono::NaiveDate;
use dealer_core::{
    core::services::{ClientService, SaleDraft, SaleService, StatsService, VehicleService},
    errors::DealerError,
    finance,
    inventory::{
        client::Client,
        dealership::Dealership,
        sale::{PaymentMethod, SaleStatus, Warranty},
        vehicle::{Documents, Vehicle, VehicleStatus},
    },
    search,
    stats::ReportPeriod,
};

fn prepared_dealership() -> Dealership {
    let mut dealership = Dealership::new("Integration");
    VehicleService::create(
        &mut dealership,
        Vehicle::new("Toyota", "Corolla", 2020, 18_500_000.0, 16_000_000.0)
            .with_documents(Documents::complete()),
    )
    .unwrap();
    VehicleService::create(
        &mut dealership,
        Vehicle::new("Chevrolet", "Spark", 2019, 14_200_000.0, 12_500_000.0).with_documents(
            Documents {
                soat: true,
                technical_review: false,
                ownership: true,
            },
        ),
    )
    .unwrap();
    ClientService::create(
        &mut dealership,
        Client::new("Ana Lucia Torres", "ana.torres@email.com", "+57 302 555 7890"),
    )
    .unwrap();
    dealership
}

#[test]
fn vehicle_crud_roundtrip() {
    let mut dealership = prepared_dealership();
    let vehicle = Vehicle::new("Nissan", "Sentra", 2021, 22_500_000.0, 20_000_000.0);
    let id = VehicleService::create(&mut dealership, vehicle).unwrap();

    let fetched = VehicleService::get(&dealership, id).unwrap();
    assert_eq!(fetched.status, VehicleStatus::Available);

    let listed = VehicleService::list(&dealership);
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[2].id, id, "listing preserves insertion order");
}

#[test]
fn search_spans_brand_model_and_year() {
    let dealership = prepared_dealership();
    assert_eq!(search::search(&dealership.vehicles, "toyota").len(), 1);
    assert_eq!(search::search(&dealership.vehicles, "SPARK").len(), 1);
    assert_eq!(search::search(&dealership.vehicles, "2019").len(), 1);
    assert_eq!(
        search::search(&dealership.vehicles, "").len(),
        dealership.vehicles.len()
    );
}

#[test]
fn finance_scenario_from_listing_prices() {
    let dealership = prepared_dealership();
    let corolla = &dealership.vehicles[0];
    assert_eq!(finance::profit(corolla), 2_500_000.0);
    let margin = finance::profit_margin(corolla).unwrap();
    assert!((margin - 0.15625).abs() < 1e-12);
}

#[test]
fn dashboard_counts_pending_documents_from_ground_truth() {
    let dealership = prepared_dealership();
    let period = ReportPeriod::month(2024, 6).unwrap();
    let snapshot = StatsService::dashboard(&dealership, period);
    assert_eq!(snapshot.total_vehicles, 2);
    assert_eq!(snapshot.available_vehicles, 2);
    assert_eq!(snapshot.pending_documents, 1);
    assert_eq!(snapshot.total_clients, 1);
    assert_eq!(snapshot.total_revenue, 0.0);
}

#[test]
fn total_profit_sums_stored_sale_profit() {
    let mut dealership = prepared_dealership();
    let vehicle_id = dealership.vehicles[0].id;
    let client_id = dealership.clients[0].id;
    let sale = SaleService::record(
        &mut dealership,
        SaleDraft::new(
            vehicle_id,
            client_id,
            19_000_000.0,
            PaymentMethod::BankTransfer,
            Warranty::new(12, ["Motor"]),
            NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
        ),
    )
    .unwrap();

    assert_eq!(sale.profit, 3_000_000.0);
    assert_eq!(finance::total_profit(&dealership.sales), 3_000_000.0);
    assert_eq!(sale.status, SaleStatus::Pending);
}

#[test]
fn record_sale_against_missing_client_leaves_state_unchanged() {
    let mut dealership = prepared_dealership();
    let vehicle_id = dealership.vehicles[0].id;
    let before = dealership.sale_count();
    let err = SaleService::record(
        &mut dealership,
        SaleDraft::new(
            vehicle_id,
            uuid::Uuid::new_v4(),
            19_000_000.0,
            PaymentMethod::Cash,
            Warranty::default(),
            NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
        ),
    )
    .expect_err("dangling client reference");
    assert!(matches!(err, DealerError::Reference(_)));
    assert_eq!(dealership.sale_count(), before);
}
