#![doc(test(attr(deny(warnings))))]

//! Budget Ledger keeps per-category budget ledgers (deposits, withdrawals,
//! transfers) and renders them as text: a ledger printout per category and a
//! percentage-spent bar chart across categories.

pub mod chart;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use chart::{create_spend_chart, render_spend_chart};
pub use errors::{ConfigError, LedgerError};
pub use ledger::{Category, Transaction};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}
