//! Transaction model
//!
//! Represents a single dated income or expense record tied to a wallet.
//! Records are immutable once created by the external store; the rest of
//! the crate only reads snapshots of them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryKey;
use super::ids::{TransactionId, WalletId};
use super::money::Money;

/// Whether a transaction adds to or draws from its wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The wallet this transaction belongs to (back-reference)
    pub wallet_id: WalletId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount magnitude; always non-negative, sign is carried by `kind`
    pub amount: Money,

    /// Category key, resolved against the fixed registry
    #[serde(default)]
    pub category: CategoryKey,

    /// When the transaction occurred. `None` when the store hands over a
    /// missing or unparseable timestamp; such records match no time window.
    #[serde(default)]
    pub date: Option<NaiveDateTime>,

    /// Free-text label (empty when absent)
    #[serde(default)]
    pub description: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        wallet_id: WalletId,
        kind: TransactionKind,
        amount: Money,
        category: CategoryKey,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            wallet_id,
            kind,
            amount,
            category,
            date: Some(date),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a transaction with a description
    pub fn with_description(
        wallet_id: WalletId,
        kind: TransactionKind,
        amount: Money,
        category: CategoryKey,
        date: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(wallet_id, kind, amount, category, date);
        txn.description = description.into();
        txn
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Signed effect on the wallet balance: income positive, expense negative
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// The calendar date of the transaction, if it has a timestamp
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.map(|d| d.date())
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        write!(f, "{} {} {}", date, self.category.label(), self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative (got {})", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
