//! AhorrApp core - personal finance tracking
//!
//! This library provides the data core behind the AhorrApp client: wallets,
//! income/expense transactions, the category registry, and the pure
//! pipeline that turns a transaction snapshot into the filtered, searched,
//! sorted list and the live statistics the screens render.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and path management
//! - `error`: Custom error types
//! - `models`: Core data models (wallets, transactions, categories, money)
//! - `query`: Filter, search, and sort over transaction snapshots
//! - `reports`: Derived statistics (transaction summary, wallet overview)
//! - `store`: In-memory record collections
//! - `services`: Business logic layer maintaining wallet running totals
//! - `display`: Plain-string formatting helpers
//!
//! The query and report functions are pure: they read a snapshot plus
//! explicit state (filter key, search text, sort key, reference instant)
//! and return fresh values without touching the inputs. Wall-clock time is
//! captured only in the `*_now` convenience entry points.
//!
//! # Example
//!
//! ```rust
//! use ahorrapp::models::{CategoryKey, Money, Transaction, TransactionKind, WalletId};
//! use ahorrapp::query::{SortKey, TransactionFilter, TransactionQuery};
//!
//! let wallet = WalletId::new();
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 18)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let snapshot = vec![Transaction::new(
//!     wallet,
//!     TransactionKind::Expense,
//!     Money::from_cents(12050),
//!     CategoryKey::Groceries,
//!     date,
//! )];
//!
//! let view = TransactionQuery::new()
//!     .filter(TransactionFilter::Expense)
//!     .sort(SortKey::AmountDesc)
//!     .apply(&snapshot, date);
//! assert_eq!(view.len(), 1);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{AhorrError, AhorrResult};
