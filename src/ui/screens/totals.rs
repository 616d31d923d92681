use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Kind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let totals = app.state.totals();
    let income_count = app.state.list(Kind::Income).len();
    let expense_count = app.state.list(Kind::Expense).len();

    render_card(
        f,
        cards[0],
        Kind::Income.plural(),
        &format_amount(totals.income),
        theme::GREEN,
        format!("{income_count} lançamentos"),
    );
    render_card(
        f,
        cards[1],
        Kind::Expense.plural(),
        &format_amount(totals.expense),
        theme::RED,
        format!("{expense_count} lançamentos"),
    );
    render_card(
        f,
        cards[2],
        "Saldo",
        &format_amount(totals.balance),
        theme::BLUE,
        app.state.selected().name().to_string(),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: &str, color: Color, subtitle: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            display.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}
