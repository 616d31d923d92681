use thiserror::Error;

/// Reasons a ledger operation or a form submission is declined.
///
/// Messages are user-facing: the TUI shows them inside the modal form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Informe uma categoria")]
    EmptyCategory,
    #[error("Valor inválido: '{0}'")]
    InvalidAmount(String),
    #[error("O valor deve ser maior que zero")]
    NonPositiveAmount,
    #[error("Use no máximo duas casas decimais: '{0}'")]
    TooManyDecimals(String),
    #[error("Valor muito alto")]
    AmountTooLarge,
    #[error("Mês fora do intervalo 1-12: {0}")]
    MonthOutOfRange(u8),
}
