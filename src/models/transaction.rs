use rust_decimal::Decimal;

use super::{Kind, Swatch};

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub category: String,
    pub amount: Decimal,
    pub kind: Kind,
    pub color: Swatch,
}

impl Transaction {
    pub fn new(category: impl Into<String>, amount: Decimal, kind: Kind, color: Swatch) -> Self {
        Self {
            category: category.into(),
            amount,
            kind,
            color,
        }
    }
}
