#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use super::*;
use crate::ledger::ColorSource;
use crate::models::Swatch;

struct Black;

impl ColorSource for Black {
    fn next_color(&mut self) -> Swatch {
        Swatch::from_rgb(0)
    }
}

fn app() -> App {
    App::new(Ledger::seeded(), Month::JANUARY, Box::new(Black))
}

fn press(app: &mut App, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match app.input_mode() {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Form => handle_form_input(key, app),
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_quit() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_ctrl_c_quits_from_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('e'));
    handle_form_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app);
    assert!(!app.running);
}

#[test]
fn test_month_navigation_saturates() {
    let mut app = app();
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.state.selected(), Month::JANUARY);
    for _ in 0..20 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.state.selected(), Month::DECEMBER);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.state.selected().number(), 11);
}

#[test]
fn test_add_income_through_keyboard() {
    let mut app = app();
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.input_mode(), InputMode::Form);

    type_text(&mut app, "Bônus");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "300");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode(), InputMode::Normal);
    let totals = app.state.totals();
    assert_eq!(totals.income, dec!(5300));
    assert_eq!(totals.balance, dec!(2700));
    assert_eq!(app.state.list(Kind::Income).len(), 2);
}

#[test]
fn test_form_keys_do_not_trigger_shortcuts() {
    let mut app = app();
    press(&mut app, KeyCode::Char('e'));
    // 'q', 'h' and 'l' are text while the form is open
    type_text(&mut app, "qhl");
    assert!(app.running);
    assert_eq!(app.state.selected(), Month::JANUARY);
    assert_eq!(app.state.draft().category, "qhl");
}

#[test]
fn test_empty_submission_keeps_form_open() {
    let mut app = app();
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "50");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode(), InputMode::Form);
    assert_eq!(app.state.ledger().len(Month::JANUARY), 4);
    assert!(app.state.draft().error.is_some());
}

#[test]
fn test_escape_cancels_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('+'));
    type_text(&mut app, "Bônus");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode(), InputMode::Normal);
    assert_eq!(app.status_message, "Cancelado");
    assert_eq!(app.state.ledger().len(Month::JANUARY), 4);
}

#[test]
fn test_expense_goes_to_selected_month() {
    let mut app = app();
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('-'));
    type_text(&mut app, "Gás");
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "95,90");
    press(&mut app, KeyCode::Enter);

    let march = Month::new(3).unwrap();
    assert_eq!(app.state.ledger().len(march), 1);
    assert_eq!(app.state.totals().expense, dec!(95.90));
    assert_eq!(app.tab, Kind::Expense);
}

#[test]
fn test_list_cursor_movement() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, Kind::Expense);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.list_index, 2);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.list_index, 0);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.list_index, 2);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.list_index, 1);
}

#[test]
fn test_strip_scroll_keys() {
    let mut app = app();
    app.visible_months = 4;
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.month_offset, 2);
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.month_offset, 4);
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.month_offset, 2);
    assert_eq!(app.state.selected(), Month::JANUARY);
}

#[test]
fn test_today_selects_current_month() {
    let mut app = app();
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.state.selected(), Month::current());
}
