use rust_decimal::Decimal;

/// A single ledger entry. Deposits carry a positive amount, withdrawals a
/// negative one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    amount: Decimal,
    description: String,
}

impl Transaction {
    pub(crate) fn new(amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
