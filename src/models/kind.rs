#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" | "receitas" => Some(Self::Income),
            "expense" | "despesa" | "despesas" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn all() -> &'static [Kind] {
        &[Self::Income, Self::Expense]
    }

    /// Singular UI label ("Receita" / "Despesa").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
        }
    }

    /// Plural UI label, used for tabs and totals.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Income => "Receitas",
            Self::Expense => "Despesas",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
