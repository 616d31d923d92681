use chrono::Datelike;

use crate::error::LedgerError;

const NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Calendar month, numbered 1 (Janeiro) through 12 (Dezembro).
///
/// The inner number is private so an out-of-range month cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Month = Month(1);
    pub const DECEMBER: Month = Month(12);

    pub fn new(number: u8) -> Result<Self, LedgerError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(LedgerError::MonthOutOfRange(number))
        }
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }

    /// Month of the local clock.
    pub fn current() -> Self {
        // chrono guarantees 1..=12
        Self(chrono::Local::now().month() as u8)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based position in the month strip.
    pub fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn name(&self) -> &'static str {
        NAMES[self.index()]
    }

    /// Following month; December stays December.
    pub fn succ(&self) -> Self {
        Self((self.0 + 1).min(Self::DECEMBER.0))
    }

    /// Preceding month; January stays January.
    pub fn pred(&self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::JANUARY.0))
    }
}

impl Default for Month {
    fn default() -> Self {
        Self::JANUARY
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
