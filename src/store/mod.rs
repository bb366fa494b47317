//! In-memory record store
//!
//! Holds the current snapshot of wallets and transactions the way the
//! external document store hands them over. There is no file or network
//! I/O here; the snapshot is replaced wholesale when the live subscription
//! pushes a new one, and the service layer mutates it between pushes.

pub mod transactions;
pub mod wallets;

pub use transactions::TransactionStore;
pub use wallets::WalletStore;

/// Main store coordinator that provides access to all collections
#[derive(Default)]
pub struct Store {
    pub wallets: WalletStore,
    pub transactions: TransactionStore,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserId, Wallet};

    #[test]
    fn test_store_creation() {
        let store = Store::new();
        assert!(store.wallets.get_all().unwrap().is_empty());
        assert!(store.transactions.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_collections_are_independent() {
        let store = Store::new();
        store
            .wallets
            .upsert(Wallet::new(UserId::new(), "Efectivo"))
            .unwrap();

        assert_eq!(store.wallets.get_all().unwrap().len(), 1);
        assert!(store.transactions.get_all().unwrap().is_empty());
    }
}
