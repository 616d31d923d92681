use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Kind;
use crate::state::Field;
use crate::ui::app::App;
use crate::ui::theme;

const LABEL_WIDTH: usize = 11;

/// Modal form for a new income or expense entry.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, kind: Kind) {
    let draft = app.state.draft();
    let noun = kind.label().to_lowercase();

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Insira os detalhes da sua nova {noun} aqui."),
            theme::dim_style(),
        )),
        Line::from(""),
        field_line("Categoria", &draft.category, draft.focus == Field::Category),
        Line::from(""),
        field_line("Valor", &draft.amount, draft.focus == Field::Amount),
        Line::from(""),
    ];

    match draft.error {
        Some(ref err) => lines.push(Line::from(Span::styled(format!(" {err}"), theme::error_style()))),
        None => lines.push(Line::from("")),
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!(" Enter: Adicionar {} ", kind.label()),
            theme::selected_style().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Tab: campo  Esc: cancelar", theme::dim_style()),
    ]));

    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_width = 56.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    let accent = match kind {
        Kind::Income => theme::GREEN,
        Kind::Expense => theme::RED,
    };

    f.render_widget(Clear, popup_area);
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" Adicionar Nova {} ", kind.label()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(form, popup_area);

    // Cursor sits after the focused field's text
    let (row, text) = match draft.focus {
        Field::Category => (3, &draft.category),
        Field::Amount => (5, &draft.amount),
    };
    let col = popup_area.x + 1 + (LABEL_WIDTH + 3 + text.chars().count()) as u16;
    if col < popup_area.x + popup_area.width.saturating_sub(1) && row < popup_height {
        f.set_cursor_position((col, popup_area.y + row));
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let marker = if focused { "▸" } else { " " };
    let value_style = if focused {
        Style::default().fg(theme::TEXT).bg(theme::SURFACE)
    } else {
        theme::normal_style()
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme::ACCENT)),
        Span::styled(format!("{label:>LABEL_WIDTH$}: "), theme::dim_style()),
        Span::styled(value, value_style),
    ])
}
