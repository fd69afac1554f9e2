use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::*;

/// Date and amount of the entry a fresh ledger opens with.
const OPENING_DATE: (i32, u32, u32) = (2024, 11, 20);
const OPENING_SALARY: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{category} is not a {direction} category")]
    CategoryMismatch {
        direction: Direction,
        category: Category,
    },
    #[error("amount must not be negative (got {0})")]
    NegativeAmount(Decimal),
    #[error("adding {amount} would overflow the {direction} total")]
    TotalOverflow {
        direction: Direction,
        amount: Decimal,
    },
    #[error("no transaction with id {0}")]
    UnknownTransaction(TransactionId),
    #[error("row {index} is out of range (ledger has {len} transactions)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Owner of the transaction list and its running totals.
///
/// Totals are adjusted on every insert and delete rather than recomputed, so
/// `total_in`/`total_out` always equal the sums over the current list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    total_in: Decimal,
    total_out: Decimal,
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A ledger holding the opening salary entry.
    pub(crate) fn with_opening_entry() -> Self {
        let mut ledger = Self::new();
        let (y, m, d) = OPENING_DATE;
        let date = NaiveDate::from_ymd_opt(y, m, d);
        debug_assert!(date.is_some(), "invalid opening date {OPENING_DATE:?}");
        if let Some(date) = date {
            let opened = ledger.add_transaction_on(
                Direction::In,
                Category::Salary,
                Decimal::from(OPENING_SALARY),
                date,
            );
            debug_assert!(opened.is_ok(), "opening entry rejected: {opened:?}");
        }
        ledger
    }

    pub(crate) fn total_in(&self) -> Decimal {
        self.total_in
    }

    pub(crate) fn total_out(&self) -> Decimal {
        self.total_out
    }

    pub(crate) fn balance(&self) -> Decimal {
        self.total_in - self.total_out
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub(crate) fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a transaction dated today.
    pub(crate) fn add_transaction(
        &mut self,
        direction: Direction,
        category: Category,
        amount: Decimal,
    ) -> Result<TransactionId, LedgerError> {
        let today = Local::now().date_naive();
        self.add_transaction_on(direction, category, amount, today)
    }

    pub(crate) fn add_transaction_on(
        &mut self,
        direction: Direction,
        category: Category,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<TransactionId, LedgerError> {
        if category.direction() != direction {
            return Err(LedgerError::CategoryMismatch {
                direction,
                category,
            });
        }
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(amount));
        }

        let total = match direction {
            Direction::In => &mut self.total_in,
            Direction::Out => &mut self.total_out,
        };
        *total = total
            .checked_add(amount)
            .ok_or(LedgerError::TotalOverflow { direction, amount })?;

        self.next_id += 1;
        let id = TransactionId(self.next_id);
        self.transactions.push(Transaction {
            id,
            direction,
            date,
            category,
            amount,
        });

        tracing::info!(%id, %direction, %category, %amount, "transaction added");
        Ok(id)
    }

    /// Remove the transaction with `id`, reversing its effect on the totals.
    pub(crate) fn delete_transaction(
        &mut self,
        id: TransactionId,
    ) -> Result<Transaction, LedgerError> {
        let index = self
            .position(id)
            .ok_or(LedgerError::UnknownTransaction(id))?;
        Ok(self.remove(index))
    }

    /// Positional delete. An out-of-range index leaves the ledger untouched.
    pub(crate) fn delete_at(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        if index >= self.transactions.len() {
            let len = self.transactions.len();
            tracing::error!(index, len, "delete requested for a row that does not exist");
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        Ok(self.remove(index))
    }

    fn remove(&mut self, index: usize) -> Transaction {
        let txn = self.transactions.remove(index);
        match txn.direction {
            Direction::In => self.total_in -= txn.amount,
            Direction::Out => self.total_out -= txn.amount,
        }
        tracing::info!(id = %txn.id, direction = %txn.direction, amount = %txn.amount, "transaction deleted");
        txn
    }
}
