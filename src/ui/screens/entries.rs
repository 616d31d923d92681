use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::Kind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let kind = app.tab;
    let entries = app.state.list(kind);
    let month = app.state.selected();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {} de {} ({}) ", kind.plural(), month.name(), entries.len()),
            theme::title_style(),
        ));

    if entries.is_empty() {
        let key = match kind {
            Kind::Income => "i",
            Kind::Expense => "e",
        };
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Nenhuma {} em {}", kind.label().to_lowercase(), month.name()),
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Pressione {key} para adicionar"),
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["", "Categoria", "Valor"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let amount_style = match kind {
        Kind::Income => Style::default().fg(theme::GREEN),
        Kind::Expense => Style::default().fg(theme::RED),
    };

    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.list_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(Span::styled(
                    " ■",
                    Style::default().fg(theme::swatch_color(txn.color)),
                )),
                Cell::from(truncate(&txn.category, 40)),
                Cell::from(Span::styled(format_amount(txn.amount), amount_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
