use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Category, Direction};

/// Sequence number handed out by the ledger; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub u64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub direction: Direction,
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Decimal,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.direction == Direction::In
    }

    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Out
    }
}
