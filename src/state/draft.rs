/// Input field of the add-transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Category,
    Amount,
}

/// Text typed into the add-transaction form.
///
/// Shared by the income and expense modals, and kept when a modal is cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub category: String,
    pub amount: String,
    pub focus: Field,
    /// Message from the last rejected submission.
    pub error: Option<String>,
}

impl Draft {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Category => Field::Amount,
            Field::Amount => Field::Category,
        };
    }

    pub fn push(&mut self, c: char) {
        match self.focus {
            Field::Category => self.category.push(c),
            // Only characters that can be part of an amount
            Field::Amount if c.is_ascii_digit() || c == '.' || c == ',' => self.amount.push(c),
            Field::Amount => {}
        }
    }

    pub fn pop(&mut self) {
        match self.focus {
            Field::Category => self.category.pop(),
            Field::Amount => self.amount.pop(),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
