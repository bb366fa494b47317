//! Core data models for AhorrApp
//!
//! Plain record types matching the documents the external store hands over:
//! transactions, wallets, the fixed category registry, money amounts, and
//! strongly-typed IDs.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod wallet;

pub use category::{CategoryDescriptor, CategoryKey};
pub use ids::{TransactionId, UserId, WalletId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
pub use wallet::{Wallet, WalletValidationError};
