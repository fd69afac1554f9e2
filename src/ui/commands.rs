use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Focus};
use crate::form::TransactionForm;
use crate::models::{Category, Direction};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Cashbook", cmd_quit, r);
    register_command!("quit", "Quit Cashbook", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add out 50 Groceries)",
        cmd_add,
        r
    );
    register_command!("a", "Add transaction (e.g. :a in 2500 Salary)", cmd_add, r);
    register_command!("in", "Switch the form to Cash IN", cmd_in, r);
    register_command!("out", "Switch the form to Cash OUT", cmd_out, r);
    register_command!(
        "delete",
        "Delete a row (e.g. :delete 2) or the highlighted one",
        cmd_delete,
        r
    );
    register_command!("del", "Delete a row (e.g. :delete 2) or the highlighted one", cmd_delete, r);
    register_command!("clear", "Clear the amount and category fields", cmd_clear, r);
    register_command!("history", "Focus the transaction history", cmd_history, r);
    register_command!("form", "Focus the add-transaction form", cmd_form, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

const ADD_USAGE: &str = "Usage: :add <in|out> <amount> <category>";

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    let mut parts = args.splitn(3, ' ');
    let (Some(dir), Some(amount), Some(category)) = (parts.next(), parts.next(), parts.next())
    else {
        app.set_status(ADD_USAGE);
        return Ok(());
    };

    let Some(direction) = Direction::parse(dir) else {
        app.set_status(format!("Unknown direction '{dir}'. {ADD_USAGE}"));
        return Ok(());
    };
    let Some(category) = Category::find_by_name(category) else {
        let names: Vec<&str> = direction.categories().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Unknown category '{}'. {direction}: {}",
            category.trim(),
            names.join(", ")
        ));
        return Ok(());
    };

    // Same validation path as the on-screen form, without touching its fields.
    let mut form = TransactionForm::new();
    form.set_direction(direction);
    form.set_amount(amount);
    let committed = form
        .select_category(category)
        .and_then(|()| form.submit(&mut app.ledger));

    match committed {
        Ok(id) => {
            app.refresh_history();
            let description = app
                .ledger
                .position(id)
                .and_then(|i| app.ledger.get(i))
                .map(|t| app.describe(t))
                .unwrap_or_default();
            app.set_status(format!("Added: {description}"));
        }
        Err(e) => {
            tracing::warn!(error = %e, "transaction rejected");
            app.show_notice(e.to_string());
        }
    }
    Ok(())
}

fn cmd_in(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.form.set_direction(Direction::In);
    app.focus = Focus::Form;
    app.set_status("Direction: Cash IN");
    Ok(())
}

fn cmd_out(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.form.set_direction(Direction::Out);
    app.focus = Focus::Form;
    app.set_status("Direction: Cash OUT");
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.request_delete_selected();
        return Ok(());
    }

    // Rows are numbered from 1 as shown in the history panel.
    let row = match args.parse::<usize>() {
        Ok(row) if row >= 1 => row,
        _ => {
            app.set_status(format!("Invalid row: {args}"));
            return Ok(());
        }
    };

    match app.ledger.delete_at(row - 1) {
        Ok(txn) => {
            let description = app.describe(&txn);
            app.refresh_history();
            app.set_status(format!("Deleted: {description}"));
        }
        Err(e) => app.set_status(format!("Delete failed: {e}")),
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.form.clear();
    app.set_status("Form cleared");
    Ok(())
}

fn cmd_history(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.focus = Focus::History;
    Ok(())
}

fn cmd_form(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.focus = Focus::Form;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
