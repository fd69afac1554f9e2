#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Category, Direction};

fn app() -> App {
    App::new(&Config::default())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_full_form_flow_by_keys() {
    let mut app = app();

    // Amount field: typing digits starts editing.
    type_str(&mut app, "50");
    assert_eq!(app.input_mode, InputMode::Editing);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.form_field, FormField::Direction);

    // Switch to Cash OUT, then pick the first outflow category.
    press(&mut app, KeyCode::Right);
    assert_eq!(app.form.direction(), Direction::Out);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.form.category(), Some(Category::Groceries));

    press(&mut app, KeyCode::Down);
    assert_eq!(app.form_field, FormField::Add);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.ledger.len(), 2);
    assert_eq!(app.ledger.total_out(), dec!(50));
    assert_eq!(app.ledger.balance(), dec!(9950));
    assert_eq!(app.form.amount(), "");
    assert_eq!(app.form.category(), None);
    assert_eq!(app.form.direction(), Direction::Out);
}

#[test]
fn test_submit_without_amount_blocks_with_notice() {
    let mut app = app();
    app.form_field = FormField::Category;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.form.category(), Some(Category::Salary));

    press(&mut app, KeyCode::Char('a'));
    assert!(app.notice.is_some());
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.form.category(), Some(Category::Salary));

    // The notice eats the next key.
    press(&mut app, KeyCode::Char('a'));
    assert!(app.notice.is_none());
    assert_eq!(app.ledger.len(), 1);
}

#[test]
fn test_direction_change_clears_category_by_keys() {
    let mut app = app();
    app.form_field = FormField::Category;
    press(&mut app, KeyCode::Left);
    assert_eq!(app.form.category(), Some(Category::Loan));
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.form.direction(), Direction::Out);
    assert_eq!(app.form.category(), None);
}

#[test]
fn test_editing_keeps_any_text() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Editing);
    type_str(&mut app, "12x");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.form.amount(), "12");
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_delete_from_history_by_keys() {
    let mut app = app();
    app.ledger
        .add_transaction(Direction::Out, Category::Groceries, dec!(50))
        .unwrap();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::History);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.history_index, 1);

    press(&mut app, KeyCode::Char('D'));
    assert_eq!(app.input_mode, InputMode::Confirm);
    press(&mut app, KeyCode::Char('y'));

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.total_out(), Decimal::ZERO);
    assert_eq!(app.ledger.balance(), dec!(10000));
    assert_eq!(app.history_index, 0);
}

#[test]
fn test_delete_cancelled_by_other_key() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.status_message, "Cancelled");
}

#[test]
fn test_history_navigation_is_bounded() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.history_index, 0);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.history_index, 0);
}

#[test]
fn test_command_mode_by_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    type_str(&mut app, "add out 20 Taxi");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.ledger.total_out(), dec!(20));
}

#[test]
fn test_command_backspace_to_empty_leaves_mode() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.running);
}

#[test]
fn test_help_overlay_closes_on_any_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('a'));
    assert!(!app.show_help);
    assert!(app.notice.is_none());
}

#[test]
fn test_ctrl_q_quits() {
    let mut app = app();
    handle_key(
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        &mut app,
    )
    .unwrap();
    assert!(!app.running);
}
