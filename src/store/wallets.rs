//! In-memory wallet collection

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AhorrError, AhorrResult};
use crate::models::{UserId, Wallet, WalletId};

/// Repository holding the current wallet snapshot
#[derive(Default)]
pub struct WalletStore {
    data: RwLock<HashMap<WalletId, Wallet>>,
}

impl WalletStore {
    /// Create an empty wallet store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot (e.g. when the external source pushes one)
    pub fn replace_all(&self, wallets: Vec<Wallet>) -> AhorrResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for wallet in wallets {
            data.insert(wallet.id, wallet);
        }
        Ok(())
    }

    /// Get a wallet by ID
    pub fn get(&self, id: WalletId) -> AhorrResult<Option<Wallet>> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get a wallet by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> AhorrResult<Option<Wallet>> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|w| w.name.to_lowercase() == lower)
            .cloned())
    }

    /// Check whether a wallet name is taken, optionally excluding one ID
    /// (used when renaming a wallet onto its own name).
    pub fn name_exists(&self, name: &str, exclude: Option<WalletId>) -> AhorrResult<bool> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|w| w.name.to_lowercase() == lower && Some(w.id) != exclude))
    }

    /// Get all wallets, newest first
    pub fn get_all(&self) -> AhorrResult<Vec<Wallet>> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut wallets: Vec<_> = data.values().cloned().collect();
        wallets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(wallets)
    }

    /// Get all wallets belonging to a user, newest first
    pub fn get_by_user(&self, user_id: UserId) -> AhorrResult<Vec<Wallet>> {
        let data = self
            .data
            .read()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire read lock: {}", e)))?;

        let mut wallets: Vec<_> = data
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        wallets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(wallets)
    }

    /// Insert or update a wallet
    pub fn upsert(&self, wallet: Wallet) -> AhorrResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(wallet.id, wallet);
        Ok(())
    }

    /// Remove a wallet, returning it if it existed
    pub fn remove(&self, id: WalletId) -> AhorrResult<Option<Wallet>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AhorrError::Store(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }
}
