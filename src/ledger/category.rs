use std::fmt;

use rust_decimal::Decimal;

use super::transaction::Transaction;
use crate::{
    config::{Config, LedgerLayout},
    currency::{center, fit_left, format_fixed, format_natural, pad_right_aligned},
    errors::LedgerError,
};

/// A named budget category with its own append-only ledger.
///
/// `balance` always equals the sum of the recorded amounts and `spent`
/// accumulates every withdrawal, transfers out included. Both are updated in
/// the same call that appends the transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    transactions: Vec<Transaction>,
    balance: Decimal,
    spent: Decimal,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transactions: Vec::new(),
            balance: Decimal::ZERO,
            spent: Decimal::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get_balance(&self) -> Decimal {
        self.balance
    }

    /// Total withdrawn so far, including transfers to other categories.
    pub fn spent(&self) -> Decimal {
        self.spent
    }

    /// Records a deposit. Amounts are not validated.
    pub fn deposit(&mut self, amount: Decimal, description: impl Into<String>) {
        if amount <= Decimal::ZERO {
            tracing::warn!(category = %self.name, %amount, "non-positive deposit recorded");
        }
        let description = description.into();
        tracing::debug!(category = %self.name, %amount, description = %description, "deposit");
        self.transactions.push(Transaction::new(amount, description));
        self.balance += amount;
    }

    /// Records a withdrawal when the balance covers it.
    ///
    /// Nothing changes when funds are insufficient.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        if !self.check_funds(amount) {
            tracing::debug!(
                category = %self.name,
                %amount,
                balance = %self.balance,
                "withdrawal rejected"
            );
            return Err(LedgerError::InsufficientFunds {
                category: self.name.clone(),
                requested: amount,
                available: self.balance,
            });
        }
        if amount <= Decimal::ZERO {
            tracing::warn!(category = %self.name, %amount, "non-positive withdrawal recorded");
        }
        let description = description.into();
        tracing::debug!(category = %self.name, %amount, description = %description, "withdrawal");
        self.transactions.push(Transaction::new(-amount, description));
        self.balance -= amount;
        self.spent += amount.abs();
        Ok(())
    }

    /// Moves `amount` into `destination`. Neither side changes on failure.
    pub fn transfer(
        &mut self,
        amount: Decimal,
        destination: &mut Category,
    ) -> Result<(), LedgerError> {
        self.withdraw(amount, format!("Transfer to {}", destination.name))?;
        destination.deposit(amount, format!("Transfer from {}", self.name));
        tracing::debug!(from = %self.name, to = %destination.name, %amount, "transfer");
        Ok(())
    }

    pub fn check_funds(&self, amount: Decimal) -> bool {
        amount <= self.balance
    }

    /// Renders the ledger printout with a custom layout.
    pub fn render(&self, layout: &LedgerLayout) -> String {
        let mut out = center(&self.name, layout.title_width, layout.title_fill);
        out.push('\n');
        for transaction in &self.transactions {
            out.push_str(&fit_left(transaction.description(), layout.description_width));
            let amount = format_fixed(transaction.amount(), layout.amount_precision);
            out.push_str(&pad_right_aligned(&amount, layout.amount_width));
            out.push('\n');
        }
        out.push_str(&layout.total_label);
        out.push_str(&format_natural(self.balance));
        out
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Config::default_ref().ledger))
    }
}
