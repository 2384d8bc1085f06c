pub mod client_service;
pub mod sale_service;
pub mod stats_service;
pub mod vehicle_service;

pub use client_service::{ClientPatch, ClientService};
pub use sale_service::{SaleDraft, SaleService};
pub use stats_service::StatsService;
pub use vehicle_service::{VehiclePatch, VehicleService};

use crate::errors::DealerError;

pub type ServiceResult<T> = Result<T, DealerError>;
