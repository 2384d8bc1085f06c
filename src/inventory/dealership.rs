use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{client::Client, common::Identifiable, sale::Sale, vehicle::Vehicle};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The canonical record set of one dealership: every other component works on
/// borrowed views of this container and proposes mutations back through the
/// service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dealership {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Dealership::schema_version_default")]
    pub schema_version: u8,
}

impl Dealership {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            vehicles: Vec::new(),
            clients: Vec::new(),
            sales: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Uuid {
        let id = vehicle.id;
        self.vehicles.push(vehicle);
        self.touch();
        id
    }

    pub fn add_client(&mut self, client: Client) -> Uuid {
        let id = client.id;
        self.clients.push(client);
        self.touch();
        id
    }

    pub fn add_sale(&mut self, sale: Sale) -> Uuid {
        let id = sale.id;
        self.sales.push(sale);
        self.touch();
        id
    }

    pub fn vehicle(&self, id: Uuid) -> Option<&Vehicle> {
        find_by_id(&self.vehicles, id)
    }

    pub fn vehicle_mut(&mut self, id: Uuid) -> Option<&mut Vehicle> {
        find_by_id_mut(&mut self.vehicles, id)
    }

    pub fn client(&self, id: Uuid) -> Option<&Client> {
        find_by_id(&self.clients, id)
    }

    pub fn client_mut(&mut self, id: Uuid) -> Option<&mut Client> {
        find_by_id_mut(&mut self.clients, id)
    }

    pub fn sale(&self, id: Uuid) -> Option<&Sale> {
        find_by_id(&self.sales, id)
    }

    pub fn sale_mut(&mut self, id: Uuid) -> Option<&mut Sale> {
        find_by_id_mut(&mut self.sales, id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn sale_count(&self) -> usize {
        self.sales.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

/// Id lookup over any entity collection, in insertion order.
pub fn find_by_id<T: Identifiable>(records: &[T], id: Uuid) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

pub fn find_by_id_mut<T: Identifiable>(records: &mut [T], id: Uuid) -> Option<&mut T> {
    records.iter_mut().find(|record| record.id() == id)
}
