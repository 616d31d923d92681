use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode};
use super::screens;
use super::theme;
use crate::models::Kind;

/// Rows taken by everything except the entry list body.
const CHROME_HEIGHT: u16 = 1 + 3 + 5 + 1 + 1 + 1 + 3;

/// Entry rows that fit on a terminal of `height` lines.
pub(crate) fn list_capacity(height: u16) -> usize {
    usize::from(height.saturating_sub(CHROME_HEIGHT)).max(1)
}

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Month strip
            Constraint::Length(5), // Totals
            Constraint::Length(1), // Income/expense tabs
            Constraint::Min(4),    // Entry list
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Hint bar
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    screens::months::render(f, chunks[1], app);
    screens::totals::render(f, chunks[2], app);
    render_tab_bar(f, chunks[3], app);
    screens::entries::render(f, chunks[4], app);
    render_status_bar(f, chunks[5], app);
    render_hint_bar(f, chunks[6], app);

    if let Some(kind) = app.state.modal() {
        screens::form::render(f, f.area(), app, kind);
    }
    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Controle de Despesas",
        theme::header_style(),
    )))
    .centered()
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(title, area);
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Kind::all()
        .iter()
        .map(|k| {
            if *k == app.tab {
                Line::from(Span::styled(
                    k.plural(),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(k.plural(), Style::default().fg(theme::TEXT_DIM)))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode = app.input_mode();
    let mode_label = format!(" {mode} ");
    let mode_style = match mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Form => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    };

    let selected = app.state.selected();
    let info = format!(
        " {} | {} lançamentos",
        selected.name(),
        app.state.ledger().len(selected)
    );

    let right = match mode {
        InputMode::Normal => " h/l mês | [ ] rolar | i/e adicionar | ? ajuda ",
        InputMode::Form => " Enter salvar | Tab campo | Esc cancelar ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_hint_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.status_message.is_empty() {
        Line::from(Span::styled(
            " Pressione i para nova receita, e para nova despesa, ? para ajuda",
            theme::dim_style(),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", app.status_message),
            theme::command_bar_style(),
        ))
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " Controle de Despesas - Ajuda ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Navegação"),
        row("  h/l ou ←/→       Mês anterior/próximo   t          Mês atual"),
        row("  [ ] ou PgUp/PgDn Rolar meses            Tab        Receitas/Despesas"),
        row("  j/k ou ↑/↓       Mover cursor           g/G        Início/Fim"),
        Line::from(""),
        section(" Ações"),
        row("  i ou +           Adicionar receita      e ou -     Adicionar despesa"),
        row("  q ou Ctrl-c      Sair                   ?          Ajuda"),
        Line::from(""),
        section(" Formulário"),
        row("  Tab/↑/↓          Trocar campo           Enter      Salvar"),
        row("  Backspace        Apagar                 Esc        Cancelar"),
        Line::from(""),
        Line::from(Span::styled(
            " Pressione qualquer tecla para fechar ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
