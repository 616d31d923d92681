#![allow(clippy::unwrap_used)]

use ratatui::{backend::TestBackend, Terminal};

use super::app::App;
use super::render::{list_capacity, render};
use super::screens::months;
use crate::ledger::{ColorSource, Ledger};
use crate::models::{Kind, Month, Swatch};
use crate::state::Action;

struct Gray;

impl ColorSource for Gray {
    fn next_color(&mut self) -> Swatch {
        Swatch::from_rgb(0x808080)
    }
}

fn app() -> App {
    App::new(Ledger::seeded(), Month::JANUARY, Box::new(Gray))
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    app.visible_months = months::capacity(width);
    app.visible_rows = list_capacity(height);
    terminal.draw(|f| render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_renders_seeded_january() {
    let mut app = app();
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Controle de Despesas"));
    assert!(screen.contains("Janeiro"));
    assert!(screen.contains("R$5000.00"));
    assert!(screen.contains("R$2600.00"));
    assert!(screen.contains("R$2400.00"));
    assert!(screen.contains("Salário"));
    assert!(!screen.contains("Aluguel"));
}

#[test]
fn test_expense_tab_lists_expenses() {
    let mut app = app();
    app.switch_tab();
    assert_eq!(app.tab, Kind::Expense);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Aluguel"));
    assert!(screen.contains("Supermercado"));
    assert!(screen.contains("Investimentos"));
    assert!(screen.contains("R$1200.00"));
}

#[test]
fn test_empty_month_placeholder() {
    let mut app = app();
    app.select_month(Month::new(3).unwrap());
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("R$0.00"));
    assert!(screen.contains("Nenhuma receita em Março"));
}

#[test]
fn test_form_shows_validation_error() {
    let mut app = app();
    app.open_form(Kind::Income);
    app.state.draft_mut().amount = "50".into();
    app.submit_form();

    assert_eq!(app.state.modal(), Some(Kind::Income));
    assert_eq!(app.state.ledger().len(Month::JANUARY), 4);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Adicionar Nova Receita"));
    assert!(screen.contains("Informe uma categoria"));
}

#[test]
fn test_submit_form_adds_and_selects_new_entry() {
    let mut app = app();
    app.switch_tab();
    app.open_form(Kind::Income);
    app.state.draft_mut().category = "Bônus".into();
    app.state.draft_mut().amount = "300".into();
    app.submit_form();

    assert_eq!(app.state.modal(), None);
    assert_eq!(app.tab, Kind::Income);
    assert_eq!(app.list_index, 1);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Bônus"));
    assert!(screen.contains("R$5300.00"));
    assert!(screen.contains("R$2700.00"));
}

#[test]
fn test_help_overlay() {
    let mut app = app();
    app.show_help = true;
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Ajuda"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app();
    app.open_form(Kind::Expense);
    draw(&mut app, 10, 4);
    draw(&mut app, 1, 1);
}

#[test]
fn test_month_strip_follows_selection() {
    let mut app = app();
    app.visible_months = 4;
    app.select_month(Month::DECEMBER);
    assert_eq!(app.month_offset, 8);
    app.select_month(Month::JANUARY);
    assert_eq!(app.month_offset, 0);
}

#[test]
fn test_month_strip_scroll_keeps_selection() {
    let mut app = app();
    app.visible_months = 4;
    app.scroll_months(true);
    assert_eq!(app.month_offset, 2);
    assert_eq!(app.state.selected(), Month::JANUARY);
    app.scroll_months(false);
    app.scroll_months(false);
    assert_eq!(app.month_offset, 0);
}

#[test]
fn test_rejected_action_sets_status() {
    let mut app = app();
    assert!(app.dispatch(Action::SelectMonth(13)).is_err());
    assert_eq!(app.status_message, "Mês fora do intervalo 1-12: 13");
    assert_eq!(app.state.selected(), Month::JANUARY);
}

#[test]
fn test_capacity_bounds() {
    assert_eq!(months::capacity(0), 1);
    assert_eq!(months::capacity(500), 12);
    assert_eq!(list_capacity(5), 1);
}
