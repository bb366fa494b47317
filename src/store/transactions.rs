//! In-memory transaction collection with a per-wallet index

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AhorrError, AhorrResult};
use crate::models::{Transaction, TransactionId, WalletId};

/// Repository holding the current transaction snapshot
#[derive(Default)]
pub struct TransactionStore {
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: wallet_id -> transaction_ids
    by_wallet: RwLock<HashMap<WalletId, Vec<TransactionId>>>,
}

impl TransactionStore {
    /// Create an empty transaction store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot and rebuild the wallet index
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> AhorrResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_wallet = self
            .by_wallet
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_wallet.clear();

        for txn in transactions {
            by_wallet.entry(txn.wallet_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }
        Ok(())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> AhorrResult<Option<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest date first
    pub fn get_all(&self) -> AhorrResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Get a wallet's transactions, newest date first
    pub fn get_by_wallet(&self, wallet_id: WalletId) -> AhorrResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;
        let by_wallet = self
            .by_wallet
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_wallet
            .get(&wallet_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Insert or update a transaction, keeping the wallet index current
    pub fn upsert(&self, txn: Transaction) -> AhorrResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_wallet = self
            .by_wallet
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from the old index slot if the wallet changed
        if let Some(old) = data.get(&txn.id) {
            if old.wallet_id != txn.wallet_id {
                if let Some(ids) = by_wallet.get_mut(&old.wallet_id) {
                    ids.retain(|&id| id != txn.id);
                }
            }
        }

        let slot = by_wallet.entry(txn.wallet_id).or_default();
        if !slot.contains(&txn.id) {
            slot.push(txn.id);
        }
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Remove a transaction, returning it if it existed
    pub fn remove(&self, id: TransactionId) -> AhorrResult<Option<Transaction>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_wallet = self
            .by_wallet
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;

        let removed = data.remove(&id);
        if let Some(txn) = &removed {
            if let Some(ids) = by_wallet.get_mut(&txn.wallet_id) {
                ids.retain(|&tid| tid != id);
            }
        }
        Ok(removed)
    }

    /// Remove every transaction belonging to a wallet, returning the count
    pub fn remove_by_wallet(&self, wallet_id: WalletId) -> AhorrResult<usize> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_wallet = self
            .by_wallet
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;

        let ids = by_wallet.remove(&wallet_id).unwrap_or_default();
        let mut removed = 0;
        for id in ids {
            if data.remove(&id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
