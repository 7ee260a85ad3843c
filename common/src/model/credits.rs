use serde::{Deserialize, Serialize};

/// Remaining message credits (`GET /credits`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBalance {
    #[serde(default)]
    pub credits: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
    #[serde(other)]
    Other,
}

/// One line of `GET /credits/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub description: String,
    pub amount: i64,
    #[serde(default)]
    pub date: Option<String>,
}

impl CreditTransaction {
    /// Signed amount as displayed: debits are negative.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionKind::Debit => self.amount.saturating_abs().saturating_neg(),
            _ => self.amount,
        }
    }
}
