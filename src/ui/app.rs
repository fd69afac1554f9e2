use rust_decimal::Decimal;

use crate::config::Config;
use crate::form::TransactionForm;
use crate::ledger::Ledger;
use crate::models::*;
use crate::ui::util::{clamp_cursor, format_amount, format_date, scroll_to_bottom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Form,
    History,
}

impl Focus {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Form => Self::History,
            Self::History => Self::Form,
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form => write!(f, "Add Transaction"),
            Self::History => write!(f, "History"),
        }
    }
}

/// Rows of the add-transaction form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Amount,
    Direction,
    Category,
    Add,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Amount, Self::Direction, Self::Category, Self::Add]
    }

    pub(crate) fn next(self) -> Self {
        let fields = Self::all();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(idx + 1).min(fields.len() - 1)]
    }

    pub(crate) fn prev(self) -> Self {
        let fields = Self::all();
        let idx = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[idx.saturating_sub(1)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteTransaction {
        id: TransactionId,
        description: String,
    },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: Focus,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    /// Blocking message; the next key press dismisses it.
    pub(crate) notice: Option<String>,
    pub(crate) show_help: bool,

    pub(crate) ledger: Ledger,
    pub(crate) form: TransactionForm,
    pub(crate) form_field: FormField,

    // History
    pub(crate) history_index: usize,
    pub(crate) history_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Display
    pub(crate) currency: String,
    pub(crate) date_format: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        let ledger = if config.empty {
            Ledger::new()
        } else {
            Ledger::with_opening_entry()
        };

        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::Form,
            command_input: String::new(),
            status_message: String::new(),
            notice: None,
            show_help: false,

            ledger,
            form: TransactionForm::new(),
            form_field: FormField::Amount,

            history_index: 0,
            history_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            currency: config.currency.clone(),
            date_format: config.date_format.clone(),

            visible_rows: 10,
        }
    }

    /// Commit the pending form entry. Validation errors become a notice and
    /// leave the form as typed.
    pub(crate) fn submit_form(&mut self) {
        match self.form.submit(&mut self.ledger) {
            Ok(id) => {
                let description = self
                    .ledger
                    .position(id)
                    .and_then(|i| self.ledger.get(i))
                    .map(|t| self.describe(t))
                    .unwrap_or_default();
                scroll_to_bottom(
                    &mut self.history_index,
                    &mut self.history_scroll,
                    self.ledger.len(),
                    self.visible_rows,
                );
                self.refresh_history();
                self.form_field = FormField::Amount;
                self.set_status(format!("Added: {description}"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "transaction rejected");
                self.show_notice(e.to_string());
            }
        }
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.ledger.get(self.history_index)
    }

    /// Ask for confirmation before deleting the highlighted row.
    pub(crate) fn request_delete_selected(&mut self) {
        let Some(txn) = self.selected_transaction() else {
            self.set_status("Nothing to delete");
            return;
        };
        let id = txn.id;
        let description = self.describe(txn);
        self.confirm_message = format!("Delete {description}?");
        self.pending_action = Some(PendingAction::DeleteTransaction { id, description });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteTransaction { id, description } => {
                    match self.ledger.delete_transaction(id) {
                        Ok(_) => self.set_status(format!("Deleted: {description}")),
                        Err(e) => self.set_status(format!("Delete failed: {e}")),
                    }
                    self.refresh_history();
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    /// Redraw step after a ledger mutation: keep the history cursor on a row
    /// that still exists.
    pub(crate) fn refresh_history(&mut self) {
        clamp_cursor(
            &mut self.history_index,
            &mut self.history_scroll,
            self.ledger.len(),
            self.visible_rows,
        );
    }

    pub(crate) fn describe(&self, txn: &Transaction) -> String {
        format!(
            "{} {} {}",
            txn.direction,
            txn.category,
            self.fmt_amount(txn.amount)
        )
    }

    pub(crate) fn fmt_amount(&self, amount: Decimal) -> String {
        format_amount(amount, &self.currency)
    }

    pub(crate) fn fmt_date(&self, txn: &Transaction) -> String {
        format_date(txn.date, &self.date_format)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn show_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }
}
