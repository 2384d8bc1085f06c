pub mod client;
pub mod common;
pub mod dealership;
pub mod sale;
pub mod vehicle;

pub use client::Client;
pub use common::{Displayable, Identifiable};
pub use dealership::Dealership;
pub use sale::{PaymentMethod, Sale, SaleStatus, Warranty};
pub use vehicle::{Documents, Vehicle, VehicleCondition, VehicleStatus};
