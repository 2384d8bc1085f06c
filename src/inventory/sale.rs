//! Domain types representing sales transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::inventory::common::{Displayable, Identifiable};

/// A sale linking a vehicle to a client.
///
/// `profit` is the authoritative stored figure for this transaction; it is
/// captured at recording time and never re-derived from the vehicle, since
/// prices may be renegotiated after listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub client_id: Uuid,
    pub sale_price: f64,
    pub profit: f64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub advisor_id: String,
    pub sale_date: NaiveDate,
    pub warranty: Warranty,
    pub status: SaleStatus,
}

impl Sale {
    pub fn new(
        vehicle_id: Uuid,
        client_id: Uuid,
        sale_price: f64,
        profit: f64,
        payment_method: PaymentMethod,
        sale_date: NaiveDate,
        warranty: Warranty,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            client_id,
            sale_price,
            profit,
            payment_method,
            advisor_id: String::new(),
            sale_date,
            warranty,
            status: SaleStatus::Pending,
        }
    }

    pub fn with_advisor(mut self, advisor_id: impl Into<String>) -> Self {
        self.advisor_id = advisor_id.into();
        self
    }
}

impl Identifiable for Sale {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Sale {
    fn display_label(&self) -> String {
        format!("sale:{} [{}]", self.id, self.status)
    }
}

/// Lifecycle status of a sale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    Pending,
    Completed,
    Cancelled,
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Completed => "completed",
            SaleStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Enumerates the accepted payment methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Financing,
    BankTransfer,
}

/// Warranty terms attached to a sale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Warranty {
    pub months: u32,
    #[serde(default)]
    pub coverage: Vec<String>,
}

impl Warranty {
    pub fn new<I, S>(months: u32, coverage: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            months,
            coverage: coverage.into_iter().map(Into::into).collect(),
        }
    }
}
