use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::truncate;

/// Border rows plus the table header.
pub(crate) const CHROME_ROWS: u16 = 3;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::History;
    let transactions = app.ledger.transactions();

    let title = if focused && !transactions.is_empty() {
        format!(" History ({}) · D delete ", transactions.len())
    } else {
        format!(" History ({}) ", transactions.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(Span::styled(title, theme::panel_title(focused)));

    if transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet.", theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["#", "Type", "Date", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .skip(app.history_scroll)
        .take(area.height.saturating_sub(CHROME_ROWS) as usize)
        .map(|(i, txn)| {
            let amount_style = theme::amount_style(txn.direction);

            let style = if focused && i == app.history_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(txn.direction.as_str()),
                Cell::from(app.fmt_date(txn)),
                Cell::from(truncate(txn.category.as_str(), 16)),
                Cell::from(Span::styled(app.fmt_amount(txn.amount), amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(12),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(block);

    f.render_widget(table, area);
}
