//! Domain types representing vehicles on the lot.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::inventory::common::{Displayable, Identifiable};

/// A vehicle tracked in the dealership inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: u32,
    pub price: f64,
    pub purchase_price: f64,
    pub color: String,
    pub fuel: String,
    pub transmission: String,
    pub condition: VehicleCondition,
    pub status: VehicleStatus,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub last_maintenance: NaiveDate,
    pub documents: Documents,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_at: Option<NaiveDate>,
}

impl Vehicle {
    /// Creates a new listing in `Available` status with empty descriptive fields.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price: f64,
        purchase_price: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            brand: brand.into(),
            model: model.into(),
            year,
            mileage: 0,
            price,
            purchase_price,
            color: String::new(),
            fuel: String::new(),
            transmission: String::new(),
            condition: VehicleCondition::Good,
            status: VehicleStatus::Available,
            images: Vec::new(),
            description: String::new(),
            features: Vec::new(),
            last_maintenance: now.date_naive(),
            documents: Documents::default(),
            created_at: now,
            sold_at: None,
        }
    }

    pub fn with_mileage(mut self, mileage: u32) -> Self {
        self.mileage = mileage;
        self
    }

    pub fn with_condition(mut self, condition: VehicleCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_appearance(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_drivetrain(
        mut self,
        fuel: impl Into<String>,
        transmission: impl Into<String>,
    ) -> Self {
        self.fuel = fuel.into();
        self.transmission = transmission.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_documents(mut self, documents: Documents) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_last_maintenance(mut self, date: NaiveDate) -> Self {
        self.last_maintenance = date;
        self
    }
}

impl Identifiable for Vehicle {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Vehicle {
    fn display_label(&self) -> String {
        format!("{} {} {} [{}]", self.brand, self.model, self.year, self.status)
    }
}

/// Enumerates the supported listing conditions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCondition {
    Excellent,
    Good,
    Fair,
    NeedsRepair,
}

/// Lifecycle status of a vehicle on the lot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    Sold,
    Reserved,
    Maintenance,
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Sold => "sold",
            VehicleStatus::Reserved => "reserved",
            VehicleStatus::Maintenance => "maintenance",
        };
        f.write_str(label)
    }
}

/// Paperwork attached to a vehicle listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Documents {
    pub soat: bool,
    pub technical_review: bool,
    pub ownership: bool,
}

impl Documents {
    pub fn complete() -> Self {
        Self {
            soat: true,
            technical_review: true,
            ownership: true,
        }
    }
}
