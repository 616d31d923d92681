use crate::error::LedgerError;
use crate::ledger::{ColorSource, Ledger};
use crate::models::{Kind, Month};
use crate::state::{Action, State};
use crate::ui::util::{reveal, scroll_strip_half};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Form => write!(f, "FORM"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) state: State,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// Which list the tab bar shows.
    pub(crate) tab: Kind,
    pub(crate) list_index: usize,
    pub(crate) list_scroll: usize,

    // Month strip
    pub(crate) month_offset: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
    pub(crate) visible_months: usize,
}

impl App {
    pub(crate) fn new(ledger: Ledger, start: Month, colors: Box<dyn ColorSource>) -> Self {
        let mut app = Self {
            running: true,
            state: State::new(ledger, start, colors),
            status_message: String::new(),
            show_help: false,

            tab: Kind::Income,
            list_index: 0,
            list_scroll: 0,

            month_offset: 0,

            visible_rows: 10,
            visible_months: 12,
        };
        app.reveal_selected_month();
        app
    }

    pub(crate) fn input_mode(&self) -> InputMode {
        if self.state.modal().is_some() {
            InputMode::Form
        } else {
            InputMode::Normal
        }
    }

    /// Applies `action`, reporting a rejection in the status line.
    pub(crate) fn dispatch(&mut self, action: Action) -> Result<(), LedgerError> {
        let result = self.state.update(action);
        if let Err(ref e) = result {
            self.set_status(e.to_string());
        }
        result
    }

    pub(crate) fn select_month(&mut self, month: Month) {
        if self.dispatch(Action::SelectMonth(month.number())).is_ok() {
            self.list_index = 0;
            self.list_scroll = 0;
            self.reveal_selected_month();
            self.status_message.clear();
        }
    }

    /// Scroll the month strip by half its visible width without changing the selection.
    pub(crate) fn scroll_months(&mut self, forward: bool) {
        self.month_offset =
            scroll_strip_half(self.month_offset, self.visible_months, 12, forward);
    }

    pub(crate) fn reveal_selected_month(&mut self) {
        self.month_offset = reveal(
            self.month_offset,
            self.visible_months,
            self.state.selected().index(),
        );
    }

    pub(crate) fn switch_tab(&mut self) {
        self.tab = self.tab.other();
        self.list_index = 0;
        self.list_scroll = 0;
    }

    pub(crate) fn open_form(&mut self, kind: Kind) {
        if self.dispatch(Action::OpenModal(kind)).is_ok() {
            self.state.draft_mut().focus = crate::state::Field::Category;
        }
    }

    pub(crate) fn cancel_form(&mut self) {
        if let Some(kind) = self.state.modal() {
            if self.dispatch(Action::CloseModal(kind)).is_ok() {
                self.set_status("Cancelado");
            }
        }
    }

    pub(crate) fn submit_form(&mut self) {
        let Some(action) = self.state.submit_draft() else {
            return;
        };
        let kind = self.state.modal();
        if self.dispatch(action).is_ok() {
            if let Some(kind) = kind {
                self.tab = kind;
                let len = self.current_list_len();
                self.list_index = len.saturating_sub(1);
                self.list_scroll = len.saturating_sub(self.visible_rows.max(1));
                self.set_status(format!("{} adicionada", kind.label()));
            }
        }
    }

    pub(crate) fn current_list_len(&self) -> usize {
        self.state.list(self.tab).len()
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
