use rust_decimal::Decimal;
use thiserror::Error;

/// Failures a ledger operation can report without touching any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Insufficient funds in category '{category}': requested {requested}, available {available}")]
    InsufficientFunds {
        category: String,
        requested: Decimal,
        available: Decimal,
    },
}

/// Errors raised while loading or saving the layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
