mod draft;

pub use draft::{Draft, Field};

use crate::error::LedgerError;
use crate::ledger::{parse_amount, ColorSource, Ledger, Totals};
use crate::models::{Kind, Month, Transaction};

/// Every way the session state can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select a month by number, 1 (Janeiro) through 12.
    SelectMonth(u8),
    OpenModal(Kind),
    CloseModal(Kind),
    /// Submit an entry for the selected month. `amount` is raw user input.
    AddTransaction {
        kind: Kind,
        category: String,
        amount: String,
    },
}

/// Session state: the ledger plus the selection and modal the user is working in.
///
/// All changes go through [`State::update`].
pub struct State {
    ledger: Ledger,
    selected: Month,
    modal: Option<Kind>,
    draft: Draft,
    colors: Box<dyn ColorSource>,
}

impl State {
    pub fn new(ledger: Ledger, selected: Month, colors: Box<dyn ColorSource>) -> Self {
        Self {
            ledger,
            selected,
            modal: None,
            draft: Draft::default(),
            colors,
        }
    }

    pub fn update(&mut self, action: Action) -> Result<(), LedgerError> {
        tracing::debug!(?action, "update");
        match action {
            Action::SelectMonth(number) => {
                self.selected = Month::new(number)?;
            }
            Action::OpenModal(kind) => {
                self.modal = Some(kind);
                self.draft.error = None;
            }
            Action::CloseModal(kind) => {
                if self.modal == Some(kind) {
                    self.modal = None;
                    self.draft.error = None;
                }
            }
            Action::AddTransaction {
                kind,
                category,
                amount,
            } => {
                if let Err(e) = self.add(kind, &category, &amount) {
                    tracing::warn!(error = %e, kind = kind.as_str(), "submission rejected");
                    self.draft.error = Some(e.to_string());
                    return Err(e);
                }
                self.draft.reset();
                if self.modal == Some(kind) {
                    self.modal = None;
                }
            }
        }
        Ok(())
    }

    fn add(&mut self, kind: Kind, category: &str, amount: &str) -> Result<(), LedgerError> {
        if category.trim().is_empty() {
            return Err(LedgerError::EmptyCategory);
        }
        let amount = parse_amount(amount)?;
        let color = self.colors.next_color();
        self.ledger
            .add_transaction(self.selected, category, amount, kind, color)
    }

    /// Builds the submit action for the open modal from the current draft.
    pub fn submit_draft(&self) -> Option<Action> {
        self.modal.map(|kind| Action::AddTransaction {
            kind,
            category: self.draft.category.clone(),
            amount: self.draft.amount.clone(),
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn selected(&self) -> Month {
        self.selected
    }

    pub fn modal(&self) -> Option<Kind> {
        self.modal
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Form edits are plain text and bypass the reducer.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals_for(self.selected)
    }

    pub fn list(&self, kind: Kind) -> Vec<&Transaction> {
        self.ledger.list_for(self.selected, kind)
    }
}
