use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::{Ledger, RandomColors};
use crate::models::{Kind, Month};
use crate::ui::app::{App, InputMode};
use crate::ui::render::list_capacity;
use crate::ui::screens::months;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(start: Month) -> Result<()> {
    let mut app = App::new(Ledger::seeded(), start, Box::new(RandomColors));
    tracing::info!(month = start.number(), "starting tui");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let area = f.area();
            app.visible_rows = list_capacity(area.height);
            let visible_months = months::capacity(area.width);
            if visible_months != app.visible_months {
                app.visible_months = visible_months;
                app.reveal_selected_month();
            }
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode() {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Form => handle_form_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

pub(crate) fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('h') | KeyCode::Left => {
            let month = app.state.selected().pred();
            app.select_month(month);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            let month = app.state.selected().succ();
            app.select_month(month);
        }
        KeyCode::Char('t') => {
            app.select_month(Month::current());
        }
        KeyCode::Char('[') | KeyCode::PageUp => app.scroll_months(false),
        KeyCode::Char(']') | KeyCode::PageDown => app.scroll_months(true),
        KeyCode::Tab | KeyCode::BackTab => app.switch_tab(),
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.current_list_len();
            let page = app.visible_rows.max(1);
            scroll_down(&mut app.list_index, &mut app.list_scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.list_index, &mut app.list_scroll);
        }
        KeyCode::Char('g') => {
            scroll_to_top(&mut app.list_index, &mut app.list_scroll);
        }
        KeyCode::Char('G') => {
            let len = app.current_list_len();
            let page = app.visible_rows.max(1);
            scroll_to_bottom(&mut app.list_index, &mut app.list_scroll, len, page);
        }
        KeyCode::Char('i') | KeyCode::Char('+') => app.open_form(Kind::Income),
        KeyCode::Char('e') | KeyCode::Char('-') => app.open_form(Kind::Expense),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
}

pub(crate) fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.state.draft_mut().toggle_focus();
        }
        KeyCode::Backspace => {
            app.state.draft_mut().pop();
        }
        KeyCode::Char(c) => {
            app.state.draft_mut().push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;
