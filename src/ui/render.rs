use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Focus, FormField, InputMode};
use super::commands;
use super::panels;
use super::theme;

const HEADER_HEIGHT: u16 = 2;
const SUMMARY_HEIGHT: u16 = 4;
const FORM_HEIGHT: u16 = 7;
const BAR_HEIGHT: u16 = 2;

/// How many history rows fit in a terminal of the given height.
pub(crate) fn history_rows(height: u16) -> usize {
    height
        .saturating_sub(HEADER_HEIGHT + SUMMARY_HEIGHT + FORM_HEIGHT + BAR_HEIGHT)
        .saturating_sub(panels::history::CHROME_ROWS)
        .max(1) as usize
}

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),  // Title
            Constraint::Length(SUMMARY_HEIGHT), // Cash IN / OUT / Balance
            Constraint::Length(FORM_HEIGHT),    // Add transaction
            Constraint::Min(4),                 // History
            Constraint::Length(1),              // Status bar
            Constraint::Length(1),              // Command bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    panels::summary::render(f, chunks[1], app);
    panels::form::render(f, chunks[2], app);
    panels::history::render(f, chunks[3], app);
    render_status_bar(f, chunks[4], app);
    render_command_bar(f, chunks[5], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
    if let Some(notice) = &app.notice {
        render_notice(f, f.area(), notice);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Expense Tracker",
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Manage your cash inflow and outflow efficiently.",
            theme::dim_style(),
        )),
    ])
    .centered()
    .style(Style::default().bg(theme::BACKGROUND));
    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Editing | InputMode::Command => theme::CASH_IN,
        InputMode::Confirm => theme::CASH_OUT,
    };
    let mode_style = Style::default()
        .fg(theme::BACKGROUND)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(" {} | {} txns", app.focus, app.ledger.len());

    let right = match (app.input_mode, app.focus) {
        (InputMode::Editing, _) => " type amount | Enter done | Esc stop ",
        (_, Focus::Form) => match app.form_field {
            FormField::Amount => " 0-9 type | j/k field | a add | Tab history ",
            FormField::Direction | FormField::Category => {
                " h/l change | j/k field | a add | Tab history "
            }
            FormField::Add => " Enter add | j/k field | Tab history ",
        },
        (_, Focus::History) => " j/k move | D delete | Tab form | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::WARNING)),
                Span::styled(" [y/N] ", Style::default().fg(theme::CASH_OUT)),
            ]),
            None,
        ),
        InputMode::Normal | InputMode::Editing => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, Tab to switch panels, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::BAR_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

/// Center a popup of the given size inside `area`, clamped to fit.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let height = height.min(area.height.saturating_sub(2));
    let width = width.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_notice(f: &mut Frame, area: Rect, notice: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(notice, theme::normal_style())),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to continue ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];
    let popup = popup_area(area, 56, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let widget = Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::WARNING))
                .title(Span::styled(
                    " Cannot add transaction ",
                    Style::default()
                        .fg(theme::WARNING)
                        .add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(theme::BACKGROUND)),
        );
    f.render_widget(widget, popup);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::WARNING)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " Cashbook Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Form"),
        row("  j/k or Up/Down   Move between fields   0-9        Type an amount"),
        row("  h/l or Left/Right Change direction/category"),
        row("  Enter            Edit / change / add   a          Add transaction"),
        Line::from(""),
        section(" History"),
        row("  j/k or Up/Down   Move cursor           g/G        Top/Bottom"),
        row("  D or Delete      Delete transaction    Ctrl-d/u   Page Down/Up"),
        Line::from(""),
        section(" Anywhere"),
        row("  Tab/Shift-Tab    Switch panel          :          Command mode"),
        row("  ?                This help             Ctrl-q     Quit"),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list from the registry, one line per description under
    // its longest name.
    let mut cmd_lines: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 1)
        .map(|(&name, cmd)| (name, cmd.description))
        .collect();
    cmd_lines.sort_by_key(|(name, desc)| (*desc, std::cmp::Reverse(name.len())));
    cmd_lines.dedup_by_key(|(_, desc)| *desc);
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let popup = popup_area(area, 72, help_text.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BACKGROUND)),
    );
    f.render_widget(help, popup);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
