//! Pure financial computations over vehicle and sale values.
//!
//! Nothing here mutates the repository; every consumer that displays a
//! figure derives it through these functions so all views agree.

use crate::errors::DealerError;
use crate::inventory::sale::Sale;
use crate::inventory::vehicle::Vehicle;

/// Signed listing profit: sale price minus purchase price.
pub fn profit(vehicle: &Vehicle) -> f64 {
    vehicle.price - vehicle.purchase_price
}

/// Profit expressed as a ratio of the purchase price.
///
/// Callers must guard against zero purchase prices; this reports
/// `DivisionUndefined` rather than producing an infinity.
pub fn profit_margin(vehicle: &Vehicle) -> Result<f64, DealerError> {
    if vehicle.purchase_price == 0.0 {
        return Err(DealerError::DivisionUndefined);
    }
    Ok(profit(vehicle) / vehicle.purchase_price)
}

/// Sum of sale prices over a set of sales.
pub fn total_revenue(sales: &[Sale]) -> f64 {
    sales.iter().map(|sale| sale.sale_price).sum()
}

/// Sum of stored per-sale profits. The stored figure is authoritative;
/// it is not re-derived from the vehicle listing.
pub fn total_profit(sales: &[Sale]) -> f64 {
    sales.iter().map(|sale| sale.profit).sum()
}

/// Mean sale price, defined as 0 for an empty set by policy.
pub fn average_ticket(sales: &[Sale]) -> f64 {
    if sales.is_empty() {
        return 0.0;
    }
    total_revenue(sales) / sales.len() as f64
}
