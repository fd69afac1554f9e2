use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let ledger = &app.ledger;
    let balance = ledger.balance();
    let in_count = ledger.transactions().iter().filter(|t| t.is_income()).count();
    let out_count = ledger.transactions().iter().filter(|t| t.is_expense()).count();

    render_card(
        f,
        cards[0],
        "Cash IN",
        app.fmt_amount(ledger.total_in()),
        theme::CASH_IN,
        format!("{in_count} txns"),
    );
    render_card(
        f,
        cards[1],
        "Cash OUT",
        app.fmt_amount(ledger.total_out()),
        theme::CASH_OUT,
        format!("{out_count} txns"),
    );
    render_card(
        f,
        cards[2],
        "Balance",
        app.fmt_amount(balance),
        theme::balance_colour(balance),
        String::new(),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color, sub: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            display,
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}
