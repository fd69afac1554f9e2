use ratatui::style::{Color, Modifier, Style};
use rust_decimal::Decimal;

use crate::models::Direction;

pub(crate) const BACKGROUND: Color = Color::Rgb(30, 30, 46);
pub(crate) const BAR_BG: Color = Color::Rgb(24, 24, 37);
pub(crate) const BORDER: Color = Color::Rgb(69, 71, 90);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const CASH_IN: Color = Color::Rgb(166, 227, 161);
pub(crate) const CASH_OUT: Color = Color::Rgb(243, 139, 168);
pub(crate) const WARNING: Color = Color::Rgb(249, 226, 175);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(BACKGROUND).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn amount_style(direction: Direction) -> Style {
    match direction {
        Direction::In => Style::default().fg(CASH_IN),
        Direction::Out => Style::default().fg(CASH_OUT),
    }
}

/// Balance card colour: accent while the balance holds, red once it goes negative.
pub(crate) fn balance_colour(balance: Decimal) -> Color {
    if balance < Decimal::ZERO {
        CASH_OUT
    } else {
        ACCENT
    }
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(BAR_BG)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(BAR_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(BAR_BG)
}

/// Border colour for a panel, brighter when it has focus.
pub(crate) fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER)
    }
}

pub(crate) fn panel_title(focused: bool) -> Style {
    let fg = if focused { ACCENT } else { TEXT_DIM };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}
