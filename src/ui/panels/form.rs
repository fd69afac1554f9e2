use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus, FormField, InputMode};
use crate::ui::theme;

const LABEL_WIDTH: usize = 11;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Form;
    let form = &app.form;
    let editing = app.input_mode == InputMode::Editing;

    let field_style = |field: FormField| {
        if focused && app.form_field == field {
            theme::selected_style()
        } else {
            theme::normal_style()
        }
    };

    let amount_text = if form.amount().is_empty() && !editing {
        Span::styled("Amount", theme::dim_style())
    } else {
        Span::styled(form.amount().to_string(), field_style(FormField::Amount))
    };

    let category_text = match form.category() {
        Some(c) => Span::styled(format!("< {c} >"), field_style(FormField::Category)),
        None => Span::styled(
            "< Category >",
            if focused && app.form_field == FormField::Category {
                theme::selected_style()
            } else {
                theme::dim_style()
            },
        ),
    };

    let options: Vec<&str> = form.category_options().iter().map(|c| c.as_str()).collect();

    let lines = vec![
        Line::from(vec![label("Amount"), amount_text]),
        Line::from(vec![
            label("Direction"),
            Span::styled(
                format!("< {} >", form.direction()),
                field_style(FormField::Direction),
            ),
        ]),
        Line::from(vec![label("Category"), category_text]),
        Line::from(vec![
            label(""),
            Span::styled(options.join(" · "), theme::dim_style()),
        ]),
        Line::from(vec![
            label(""),
            Span::styled(
                " + Add ",
                field_style(FormField::Add).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(Span::styled(" Add Transaction ", theme::panel_title(focused)));

    f.render_widget(Paragraph::new(lines).block(block), area);

    if editing {
        let x = area.x + 1 + LABEL_WIDTH as u16 + form.amount().chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn label(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {text:<width$}", width = LABEL_WIDTH - 1),
        Style::default().fg(theme::TEXT_DIM),
    )
}
