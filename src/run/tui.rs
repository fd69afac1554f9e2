use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::ui::app::{App, Focus, FormField, InputMode};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(config: &Config) -> Result<()> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!(transactions = app.ledger.len(), "terminal ready");

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            app.visible_rows = crate::ui::render::history_rows(f.area().height);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app)?;
        }
    }
    Ok(())
}

/// Dispatch one key press. Overlays swallow the key that closes them.
pub(crate) fn handle_key(key: event::KeyEvent, app: &mut App) -> Result<()> {
    if app.notice.is_some() {
        app.notice = None;
        return Ok(());
    }
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app)?,
        InputMode::Editing => handle_editing_input(key, app),
        InputMode::Command => handle_command_input(key, app)?,
        InputMode::Confirm => handle_confirm_input(key, app),
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggled();
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => match app.focus {
            Focus::Form => handle_form_key(key, app),
            Focus::History => handle_history_key(key, app),
        },
    }
    Ok(())
}

fn handle_form_key(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.form_field = app.form_field.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.form_field = app.form_field.prev();
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_field(app, 1);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => {
            adjust_field(app, -1);
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.form_field = FormField::Amount;
            app.input_mode = InputMode::Editing;
            app.form.push_amount_char(c);
        }
        KeyCode::Backspace if app.form_field == FormField::Amount => {
            app.form.pop_amount_char();
        }
        KeyCode::Char('a') => app.submit_form(),
        KeyCode::Enter => match app.form_field {
            FormField::Amount => app.input_mode = InputMode::Editing,
            FormField::Direction => app.form.toggle_direction(),
            FormField::Category => app.form.cycle_category(1),
            FormField::Add => app.submit_form(),
        },
        _ => {}
    }
}

fn adjust_field(app: &mut App, delta: i32) {
    match app.form_field {
        FormField::Direction => app.form.toggle_direction(),
        FormField::Category => app.form.cycle_category(delta),
        FormField::Amount | FormField::Add => {}
    }
}

fn handle_history_key(key: event::KeyEvent, app: &mut App) {
    let len = app.ledger.len();
    let page = app.visible_rows.max(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_down(&mut app.history_index, &mut app.history_scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.history_index, &mut app.history_scroll);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            scroll_to_top(&mut app.history_index, &mut app.history_scroll);
        }
        KeyCode::Char('G') | KeyCode::End => {
            scroll_to_bottom(&mut app.history_index, &mut app.history_scroll, len, page);
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page / 2 {
                scroll_down(&mut app.history_index, &mut app.history_scroll, len, page);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page / 2 {
                scroll_up(&mut app.history_index, &mut app.history_scroll);
            }
        }
        KeyCode::Char('D') | KeyCode::Char('x') | KeyCode::Delete => {
            app.request_delete_selected();
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.form_field = FormField::Direction;
        }
        KeyCode::Tab => {
            app.input_mode = InputMode::Normal;
            app.form_field = app.form_field.next();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.form.pop_amount_char();
        }
        KeyCode::Char(c) => {
            app.form.push_amount_char(c);
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(),
        // Any other key = cancel
        _ => app.cancel_pending(),
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;
