use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::LedgerError;

/// Parses a user-typed amount.
///
/// Accepts `.` or a single `,` as the decimal separator (`"12,50"`), so pt-BR
/// input works. Empty, non-numeric, zero and negative values are rejected, as
/// is anything finer than a cent (trailing zeros don't count: `"1.500"` is fine).
pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidAmount(String::new()));
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    let value = Decimal::from_str(&normalized)
        .map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))?;
    if value.normalize().scale() > 2 {
        return Err(LedgerError::TooManyDecimals(trimmed.to_string()));
    }
    if value <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }
    Ok(value)
}
