mod amount;
mod color;

pub use amount::parse_amount;
pub use color::{ColorSource, RandomColors};

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::{Kind, Month, Swatch, Transaction};

/// Aggregates for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// In-memory month -> transactions mapping. Append-only.
///
/// A month with no entries has no key; reads treat it as empty.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    months: HashMap<Month, Vec<Transaction>>,
}

const SEED: [(&str, i64, Kind, u32); 4] = [
    ("Salário", 5000, Kind::Income, 0x4CAF50),
    ("Aluguel", 1200, Kind::Expense, 0xF44336),
    ("Supermercado", 400, Kind::Expense, 0x2196F3),
    ("Investimentos", 1000, Kind::Expense, 0x9C27B0),
];

impl Ledger {
    /// Ledger holding the starter entries under Janeiro.
    pub fn seeded() -> Self {
        let entries = SEED
            .iter()
            .map(|&(category, amount, kind, rgb)| {
                Transaction::new(category, Decimal::from(amount), kind, Swatch::from_rgb(rgb))
            })
            .collect();
        let mut months = HashMap::new();
        months.insert(Month::JANUARY, entries);
        Self { months }
    }

    /// Appends a transaction to `month`. Category is trimmed; a blank category,
    /// a non-positive amount, or one that would push the month's income or
    /// expense total past `Decimal::MAX` is rejected and leaves the ledger
    /// untouched.
    pub fn add_transaction(
        &mut self,
        month: Month,
        category: &str,
        amount: Decimal,
        kind: Kind,
        color: Swatch,
    ) -> Result<(), LedgerError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::EmptyCategory);
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }
        let running = self.total_of(month, kind).ok_or(LedgerError::AmountTooLarge)?;
        if running.checked_add(amount).is_none() {
            return Err(LedgerError::AmountTooLarge);
        }

        let entries = self.months.entry(month).or_default();
        entries.push(Transaction::new(category, amount, kind, color));
        tracing::info!(
            month = month.number(),
            category,
            %amount,
            kind = kind.as_str(),
            "transaction added"
        );
        Ok(())
    }

    pub fn entries(&self, month: Month) -> &[Transaction] {
        self.months.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, month: Month) -> usize {
        self.entries(month).len()
    }

    /// Both sums are non-negative and capped at `Decimal::MAX`, so the
    /// balance subtraction can't overflow either.
    pub fn totals_for(&self, month: Month) -> Totals {
        let income = self.total_of(month, Kind::Income).unwrap_or(Decimal::MAX);
        let expense = self.total_of(month, Kind::Expense).unwrap_or(Decimal::MAX);
        Totals {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Entries of `month` with the given kind, in insertion order.
    /// Sum of `kind` entries in `month`, `None` if it overflows.
    fn total_of(&self, month: Month, kind: Kind) -> Option<Decimal> {
        self.entries(month)
            .iter()
            .filter(|txn| txn.kind == kind)
            .try_fold(Decimal::ZERO, |sum, txn| sum.checked_add(txn.amount))
    }

    pub fn list_for(&self, month: Month, kind: Kind) -> Vec<&Transaction> {
        self.entries(month)
            .iter()
            .filter(|t| t.kind == kind)
            .collect()
    }
}
