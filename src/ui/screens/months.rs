use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Month;
use crate::ui::app::App;
use crate::ui::theme;

/// Width of one month button, fits "Fevereiro" with padding.
const CELL_WIDTH: u16 = 12;
const ARROW_WIDTH: u16 = 3;

/// How many month buttons fit in a strip of `width` columns.
pub(crate) fn capacity(width: u16) -> usize {
    let inner = width.saturating_sub(2 + 2 * ARROW_WIDTH);
    usize::from(inner / CELL_WIDTH).clamp(1, 12)
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(CELL_WIDTH),
            Constraint::Length(ARROW_WIDTH),
        ])
        .split(inner);

    let can_left = app.month_offset > 0;
    let can_right = app.month_offset + app.visible_months < 12;
    f.render_widget(arrow("←", can_left), chunks[0]);
    f.render_widget(arrow("→", can_right), chunks[2]);

    let selected = app.state.selected();
    let spans: Vec<Span> = Month::all()
        .skip(app.month_offset)
        .take(app.visible_months)
        .map(|m| {
            let label = format!("{:^width$}", m.name(), width = usize::from(CELL_WIDTH));
            if m == selected {
                Span::styled(label, theme::selected_style().add_modifier(Modifier::BOLD))
            } else if app.state.ledger().len(m) > 0 {
                Span::styled(label, theme::normal_style())
            } else {
                Span::styled(label, theme::dim_style())
            }
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

fn arrow(symbol: &str, enabled: bool) -> Paragraph<'_> {
    let style = if enabled {
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::OVERLAY)
    };
    Paragraph::new(Line::from(Span::styled(symbol, style))).centered()
}
