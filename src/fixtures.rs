//! Sample dealership used by tests and demo consumers.
//!
//! Mirrors the showroom's reference data set, but every record goes through
//! the validated create and lifecycle paths so the fixtures can never drift
//! from the domain invariants.

use chrono::NaiveDate;

use crate::core::services::{ClientService, SaleDraft, SaleService, VehicleService};
use crate::inventory::client::Client;
use crate::inventory::dealership::Dealership;
use crate::inventory::sale::{PaymentMethod, Warranty};
use crate::inventory::vehicle::{Documents, Vehicle, VehicleCondition};

/// Builds the sample record set: three vehicles, three clients, and one
/// completed June 2024 sale of the Nissan Sentra.
pub fn sample_dealership() -> Dealership {
    let mut dealership = Dealership::new("AutoVentas Demo");

    VehicleService::create(
        &mut dealership,
        Vehicle::new("Toyota", "Corolla", 2020, 18_500_000.0, 16_000_000.0)
            .with_mileage(45_000)
            .with_condition(VehicleCondition::Excellent)
            .with_appearance("Blanco")
            .with_drivetrain("Gasolina", "Automática")
            .with_description("Toyota Corolla en excelente estado, único dueño.")
            .with_features(["Aire acondicionado", "Dirección hidráulica", "Vidrios eléctricos"])
            .with_last_maintenance(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap())
            .with_documents(Documents::complete()),
    )
    .expect("corolla fixture is valid");

    VehicleService::create(
        &mut dealership,
        Vehicle::new("Chevrolet", "Spark", 2019, 14_200_000.0, 12_500_000.0)
            .with_mileage(62_000)
            .with_condition(VehicleCondition::Good)
            .with_appearance("Rojo")
            .with_drivetrain("Gasolina", "Manual")
            .with_description("Chevrolet Spark económico y confiable.")
            .with_features(["Aire acondicionado", "Radio", "Llantas nuevas"])
            .with_last_maintenance(NaiveDate::from_ymd_opt(2024, 4, 20).unwrap())
            .with_documents(Documents {
                soat: true,
                technical_review: false,
                ownership: true,
            }),
    )
    .expect("spark fixture is valid");

    let sentra_id = VehicleService::create(
        &mut dealership,
        Vehicle::new("Nissan", "Sentra", 2021, 22_500_000.0, 20_000_000.0)
            .with_mileage(28_000)
            .with_condition(VehicleCondition::Excellent)
            .with_appearance("Gris")
            .with_drivetrain("Gasolina", "Automática")
            .with_description("Nissan Sentra como nuevo, bajo kilometraje.")
            .with_features(["Cámara de reversa", "Pantalla táctil", "Bluetooth"])
            .with_last_maintenance(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .with_documents(Documents::complete()),
    )
    .expect("sentra fixture is valid");

    let maria_id = ClientService::create(
        &mut dealership,
        Client::new("María González", "maria.gonzalez@email.com", "+57 300 123 4567")
            .with_address("Calle 72 #11-45, Bogotá")
            .with_id_number("1234567890")
            .with_notes("Cliente preferencial, muy puntual en pagos"),
    )
    .expect("maria fixture is valid");

    ClientService::create(
        &mut dealership,
        Client::new("Carlos Mendoza", "carlos.mendoza@email.com", "+57 301 987 6543")
            .with_address("Carrera 15 #85-32, Medellín")
            .with_id_number("0987654321")
            .with_notes("Interesado en vehículos deportivos"),
    )
    .expect("carlos fixture is valid");

    ClientService::create(
        &mut dealership,
        Client::new("Ana Lucia Torres", "ana.torres@email.com", "+57 302 555 7890")
            .with_address("Avenida 6 #14-28, Cali")
            .with_id_number("1122334455")
            .with_notes("Busca vehículo familiar, presupuesto medio"),
    )
    .expect("ana fixture is valid");

    let sale_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let sale = SaleService::record(
        &mut dealership,
        SaleDraft::new(
            sentra_id,
            maria_id,
            22_500_000.0,
            PaymentMethod::Financing,
            Warranty::new(6, ["Motor", "Transmisión", "Sistema eléctrico"]),
            sale_date,
        )
        .with_advisor("1"),
    )
    .expect("sentra sale fixture is valid");
    SaleService::complete(&mut dealership, sale.id, sale_date)
        .expect("sentra sale completes cleanly");

    dealership
}
