#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::config::Config;
use crate::ui::app::InputMode;

fn app() -> App {
    App::new(&Config::default())
}

#[test]
fn test_add_command_commits() {
    let mut app = app();
    handle_command("add out 50 groceries", &mut app).unwrap();
    assert_eq!(app.ledger.len(), 2);
    assert_eq!(app.ledger.total_out(), dec!(50));
    assert_eq!(app.ledger.balance(), dec!(9950));
    assert_eq!(app.status_message, "Added: Cash OUT Groceries $50.00");
    assert!(app.notice.is_none());
}

#[test]
fn test_add_command_multi_word_category_name() {
    let mut app = app();
    handle_command("a out 12.40 Food/Drink", &mut app).unwrap();
    assert_eq!(app.ledger.get(1).unwrap().category, Category::FoodDrink);
}

#[test]
fn test_add_command_leaves_form_untouched() {
    let mut app = app();
    app.form.set_amount("7");
    handle_command("add in 100 Business", &mut app).unwrap();
    assert_eq!(app.form.amount(), "7");
    assert_eq!(app.form.direction(), Direction::In);
}

#[test]
fn test_add_command_category_mismatch_shows_notice() {
    let mut app = app();
    handle_command("add in 50 Groceries", &mut app).unwrap();
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.total_in(), dec!(10000));
    assert!(app.notice.is_some());
}

#[test]
fn test_add_command_bad_amount_shows_notice() {
    let mut app = app();
    handle_command("add out abc Fuel", &mut app).unwrap();
    assert_eq!(app.ledger.total_out(), Decimal::ZERO);
    assert_eq!(app.notice.as_deref(), Some("'abc' is not a valid amount."));
}

#[test]
fn test_add_command_usage() {
    let mut app = app();
    handle_command("add out", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage: :add"));
    handle_command("add sideways 5 Fuel", &mut app).unwrap();
    assert!(app.status_message.starts_with("Unknown direction"));
    handle_command("add out 5 Rent", &mut app).unwrap();
    assert!(app.status_message.starts_with("Unknown category 'Rent'"));
    assert_eq!(app.ledger.len(), 1);
}

#[test]
fn test_direction_commands_clear_category() {
    let mut app = app();
    app.form.select_category(Category::Salary).unwrap();
    handle_command("out", &mut app).unwrap();
    assert_eq!(app.form.direction(), Direction::Out);
    assert_eq!(app.form.category(), None);
    handle_command("in", &mut app).unwrap();
    assert_eq!(app.form.direction(), Direction::In);
}

#[test]
fn test_delete_command_by_row() {
    let mut app = app();
    handle_command("add out 50 Groceries", &mut app).unwrap();
    handle_command("delete 2", &mut app).unwrap();
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.total_out(), Decimal::ZERO);
    assert_eq!(app.ledger.balance(), dec!(10000));
}

#[test]
fn test_delete_command_out_of_range() {
    let mut app = app();
    handle_command("delete 5", &mut app).unwrap();
    assert_eq!(app.ledger.len(), 1);
    assert!(app.status_message.starts_with("Delete failed"));

    handle_command("delete 0", &mut app).unwrap();
    assert_eq!(app.status_message, "Invalid row: 0");
}

#[test]
fn test_delete_command_without_row_asks_first() {
    let mut app = app();
    handle_command("delete", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.ledger.len(), 1);
}

#[test]
fn test_clear_command() {
    let mut app = app();
    app.form.set_amount("12");
    app.form.select_category(Category::Loan).unwrap();
    handle_command("clear", &mut app).unwrap();
    assert_eq!(app.form.amount(), "");
    assert_eq!(app.form.category(), None);
}

#[test]
fn test_quit_and_help() {
    let mut app = app();
    handle_command("help", &mut app).unwrap();
    assert!(app.show_help);
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    handle_command("dellete", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :dellete. Did you mean :delete?"
    );
}

#[test]
fn test_empty_command_is_ignored() {
    let mut app = app();
    handle_command("   ", &mut app).unwrap();
    assert!(app.status_message.is_empty());
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("add", "add"), 0);
    assert_eq!(levenshtein("ad", "add"), 1);
    assert_eq!(levenshtein("", "out"), 3);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}
