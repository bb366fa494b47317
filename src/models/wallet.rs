//! Wallet model
//!
//! A wallet is a named balance-holding container owned by a user. Its
//! running totals (`amount`, `total_income`, `total_expenses`) track the
//! net of the wallet's transactions and are maintained by the service
//! layer on every transaction mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{UserId, WalletId};
use super::money::Money;

/// A named balance-holding container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Unique identifier
    pub id: WalletId,

    /// Owning user
    pub user_id: UserId,

    /// Wallet name
    pub name: String,

    /// Reference to a hosted icon asset, or none
    #[serde(default)]
    pub image: Option<String>,

    /// Running balance: net of the wallet's transactions
    #[serde(default)]
    pub amount: Money,

    /// Sum of income transaction amounts
    #[serde(default)]
    pub total_income: Money,

    /// Sum of expense transaction amounts
    #[serde(default)]
    pub total_expenses: Money,

    /// When the wallet was created
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    /// Create a new wallet with zeroed totals
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: WalletId::new(),
            user_id,
            name: name.into(),
            image: None,
            amount: Money::zero(),
            total_income: Money::zero(),
            total_expenses: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Create a new wallet with an icon image
    pub fn with_image(user_id: UserId, name: impl Into<String>, image: impl Into<String>) -> Self {
        let mut wallet = Self::new(user_id, name);
        wallet.image = Some(image.into());
        wallet
    }

    /// Validate the wallet
    pub fn validate(&self) -> Result<(), WalletValidationError> {
        if self.name.trim().is_empty() {
            return Err(WalletValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(WalletValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

/// Validation errors for wallets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for WalletValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Wallet name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Wallet name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for WalletValidationError {}
