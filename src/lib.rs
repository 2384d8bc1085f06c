#![doc(test(attr(deny(warnings))))]

//! Dealer Core offers the domain model, status lifecycles, and derived-metric
//! computations that power a vehicle-dealership back office and its dashboard.

pub mod core;
pub mod errors;
pub mod finance;
pub mod fixtures;
pub mod inventory;
pub mod lifecycle;
pub mod search;
pub mod stats;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dealer Core tracing initialized.");
    });
}
