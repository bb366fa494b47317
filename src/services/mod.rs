//! Business logic layer
//!
//! Services wrap the in-memory store and enforce the rules the record
//! types cannot express on their own: name uniqueness, balance checks, and
//! the wallet running-total invariant.

pub mod transaction;
pub mod wallet;

pub use transaction::{CreateTransactionInput, TransactionService};
pub use wallet::WalletService;
