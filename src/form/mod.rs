use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::ledger::{Ledger, LedgerError};
use crate::models::{Category, Direction, TransactionId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter an amount.")]
    MissingAmount,
    #[error("Please select a category.")]
    MissingCategory,
    #[error("'{0}' is not a valid amount.")]
    InvalidAmount(String),
    #[error("Amount must not be negative.")]
    NegativeAmount,
    #[error("{category} is not available for {direction}.")]
    CategoryNotOffered {
        direction: Direction,
        category: Category,
    },
    #[error("{0}")]
    Rejected(#[from] LedgerError),
}

/// Parse user-entered amount text into a non-negative decimal.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingAmount);
    }
    let amount =
        Decimal::from_str(trimmed).map_err(|_| FormError::InvalidAmount(trimmed.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(FormError::NegativeAmount);
    }
    Ok(amount)
}

/// Pending entry: raw amount text, optional category, and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TransactionForm {
    amount: String,
    category: Option<Category>,
    direction: Direction,
}

impl TransactionForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn amount(&self) -> &str {
        &self.amount
    }

    pub(crate) fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub(crate) fn push_amount_char(&mut self, c: char) {
        self.amount.push(c);
    }

    pub(crate) fn pop_amount_char(&mut self) {
        self.amount.pop();
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Switch direction. The selected category belongs to the old direction's
    /// list, so it is cleared whenever the direction actually changes.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction {
            self.direction = direction;
            self.category = None;
        }
    }

    pub(crate) fn toggle_direction(&mut self) {
        self.set_direction(self.direction.toggled());
    }

    pub(crate) fn category(&self) -> Option<Category> {
        self.category
    }

    pub(crate) fn category_options(&self) -> &'static [Category] {
        self.direction.categories()
    }

    pub(crate) fn select_category(&mut self, category: Category) -> Result<(), FormError> {
        if !self.category_options().contains(&category) {
            return Err(FormError::CategoryNotOffered {
                direction: self.direction,
                category,
            });
        }
        self.category = Some(category);
        Ok(())
    }

    /// Step through the category options, wrapping at both ends.
    /// With nothing selected, a forward step picks the first option and a
    /// backward step the last.
    pub(crate) fn cycle_category(&mut self, step: i32) {
        let options = self.category_options();
        if options.is_empty() || step == 0 {
            return;
        }
        let len = options.len() as i32;
        let next = match self.category.and_then(|c| options.iter().position(|o| *o == c)) {
            Some(current) => (current as i32 + step).rem_euclid(len),
            None if step > 0 => (step - 1).rem_euclid(len),
            None => (len + step).rem_euclid(len),
        };
        self.category = Some(options[next as usize]);
    }

    pub(crate) fn clear(&mut self) {
        self.amount.clear();
        self.category = None;
    }

    /// Validate the pending entry and commit it to `ledger`.
    ///
    /// On any error the form is left exactly as it was.
    pub(crate) fn submit(&mut self, ledger: &mut Ledger) -> Result<TransactionId, FormError> {
        if self.amount.trim().is_empty() {
            return Err(FormError::MissingAmount);
        }
        let category = self.category.ok_or(FormError::MissingCategory)?;
        let amount = parse_amount(&self.amount)?;

        let id = ledger.add_transaction(self.direction, category, amount)?;
        self.clear();
        Ok(id)
    }
}
