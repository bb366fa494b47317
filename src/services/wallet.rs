//! Wallet service
//!
//! Business logic for wallet management: creation with zeroed totals,
//! renaming, icon updates, and deletion with transaction cleanup.

use crate::error::{AhorrError, AhorrResult};
use crate::models::{UserId, Wallet, WalletId};
use crate::store::Store;

/// Service for wallet management
pub struct WalletService<'a> {
    store: &'a Store,
}

impl<'a> WalletService<'a> {
    /// Create a new wallet service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new wallet. Balance and totals start at zero.
    pub fn create(
        &self,
        user_id: UserId,
        name: &str,
        image: Option<String>,
    ) -> AhorrResult<Wallet> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AhorrError::Validation("Wallet name cannot be empty".into()));
        }

        if self.store.wallets.name_exists(name, None)? {
            return Err(AhorrError::Duplicate {
                entity_type: "Wallet",
                identifier: name.to_string(),
            });
        }

        let mut wallet = Wallet::new(user_id, name);
        wallet.image = image;

        wallet
            .validate()
            .map_err(|e| AhorrError::Validation(e.to_string()))?;

        self.store.wallets.upsert(wallet.clone())?;
        Ok(wallet)
    }

    /// Get a wallet by ID
    pub fn get(&self, id: WalletId) -> AhorrResult<Option<Wallet>> {
        self.store.wallets.get(id)
    }

    /// Find a wallet by name or ID string
    pub fn find(&self, identifier: &str) -> AhorrResult<Option<Wallet>> {
        // Try by name first
        if let Some(wallet) = self.store.wallets.get_by_name(identifier)? {
            return Ok(Some(wallet));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<WalletId>() {
            return self.store.wallets.get(id);
        }

        Ok(None)
    }

    /// List a user's wallets, newest first
    pub fn list(&self, user_id: UserId) -> AhorrResult<Vec<Wallet>> {
        self.store.wallets.get_by_user(user_id)
    }

    /// Rename a wallet
    pub fn rename(&self, id: WalletId, name: &str) -> AhorrResult<Wallet> {
        let mut wallet = self
            .store
            .wallets
            .get(id)?
            .ok_or_else(|| AhorrError::wallet_not_found(id.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AhorrError::Validation("Wallet name cannot be empty".into()));
        }

        if self.store.wallets.name_exists(name, Some(id))? {
            return Err(AhorrError::Duplicate {
                entity_type: "Wallet",
                identifier: name.to_string(),
            });
        }

        wallet.name = name.to_string();
        wallet
            .validate()
            .map_err(|e| AhorrError::Validation(e.to_string()))?;

        self.store.wallets.upsert(wallet.clone())?;
        Ok(wallet)
    }

    /// Set or clear the wallet's icon reference
    pub fn set_image(&self, id: WalletId, image: Option<String>) -> AhorrResult<Wallet> {
        let mut wallet = self
            .store
            .wallets
            .get(id)?
            .ok_or_else(|| AhorrError::wallet_not_found(id.to_string()))?;

        wallet.image = image;
        self.store.wallets.upsert(wallet.clone())?;
        Ok(wallet)
    }

    /// Delete a wallet and every transaction that belongs to it.
    /// Returns the number of transactions removed alongside the wallet.
    pub fn delete(&self, id: WalletId) -> AhorrResult<usize> {
        if self.store.wallets.get(id)?.is_none() {
            return Err(AhorrError::wallet_not_found(id.to_string()));
        }

        let removed = self.store.transactions.remove_by_wallet(id)?;
        self.store.wallets.remove(id)?;
        Ok(removed)
    }
}
