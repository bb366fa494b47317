//! Transaction service
//!
//! Business logic for recording income and expenses. Every mutation keeps
//! the owning wallet's running totals (`amount`, `total_income`,
//! `total_expenses`) equal to the net of that wallet's transactions:
//! creation applies the transaction's effect, updates revert the old effect
//! before applying the new one, and deletion reverts it.

use chrono::NaiveDateTime;

use crate::error::{AhorrError, AhorrResult};
use crate::models::{
    CategoryKey, Money, Transaction, TransactionId, TransactionKind, Wallet, WalletId,
};
use crate::store::Store;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a Store,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub wallet_id: WalletId,
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: CategoryKey,
    pub date: NaiveDateTime,
    pub description: Option<String>,
}

/// Apply a transaction's effect to its wallet's running totals
fn apply_effect(wallet: &mut Wallet, txn: &Transaction) {
    match txn.kind {
        TransactionKind::Income => {
            wallet.amount += txn.amount;
            wallet.total_income += txn.amount;
        }
        TransactionKind::Expense => {
            wallet.amount -= txn.amount;
            wallet.total_expenses += txn.amount;
        }
    }
}

/// Undo a transaction's effect on its wallet's running totals
fn revert_effect(wallet: &mut Wallet, txn: &Transaction) {
    match txn.kind {
        TransactionKind::Income => {
            wallet.amount -= txn.amount;
            wallet.total_income -= txn.amount;
        }
        TransactionKind::Expense => {
            wallet.amount += txn.amount;
            wallet.total_expenses -= txn.amount;
        }
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Record a new transaction and update the wallet's totals.
    ///
    /// Expenses larger than the wallet's running balance are rejected.
    pub fn create(&self, input: CreateTransactionInput) -> AhorrResult<Transaction> {
        let mut wallet = self
            .store
            .wallets
            .get(input.wallet_id)?
            .ok_or_else(|| AhorrError::wallet_not_found(input.wallet_id.to_string()))?;

        let mut txn = Transaction::new(
            input.wallet_id,
            input.kind,
            input.amount,
            input.category,
            input.date,
        );
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| AhorrError::Validation(e.to_string()))?;

        if txn.is_expense() && txn.amount > wallet.amount {
            return Err(AhorrError::InsufficientFunds {
                wallet: wallet.name,
                needed: txn.amount.cents(),
                available: wallet.amount.cents(),
            });
        }

        apply_effect(&mut wallet, &txn);

        self.store.transactions.upsert(txn.clone())?;
        self.store.wallets.upsert(wallet)?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> AhorrResult<Option<Transaction>> {
        self.store.transactions.get(id)
    }

    /// List all transactions, newest first
    pub fn list(&self) -> AhorrResult<Vec<Transaction>> {
        self.store.transactions.get_all()
    }

    /// List a wallet's transactions, newest first
    pub fn list_for_wallet(&self, wallet_id: WalletId) -> AhorrResult<Vec<Transaction>> {
        self.store.transactions.get_by_wallet(wallet_id)
    }

    /// Update a transaction. The old effect is reverted from its wallet and
    /// the new effect applied, so the totals stay consistent even when the
    /// transaction moves between wallets.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        id: TransactionId,
        wallet_id: Option<WalletId>,
        kind: Option<TransactionKind>,
        amount: Option<Money>,
        category: Option<CategoryKey>,
        date: Option<NaiveDateTime>,
        description: Option<String>,
    ) -> AhorrResult<Transaction> {
        let old = self
            .store
            .transactions
            .get(id)?
            .ok_or_else(|| AhorrError::transaction_not_found(id.to_string()))?;

        let mut txn = old.clone();
        if let Some(new_wallet) = wallet_id {
            txn.wallet_id = new_wallet;
        }
        if let Some(new_kind) = kind {
            txn.kind = new_kind;
        }
        if let Some(new_amount) = amount {
            txn.amount = new_amount;
        }
        if let Some(new_category) = category {
            txn.category = new_category;
        }
        if let Some(new_date) = date {
            txn.date = Some(new_date);
        }
        if let Some(new_description) = description {
            txn.description = new_description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| AhorrError::Validation(e.to_string()))?;

        let mut source = self
            .store
            .wallets
            .get(old.wallet_id)?
            .ok_or_else(|| AhorrError::wallet_not_found(old.wallet_id.to_string()))?;

        if txn.wallet_id == old.wallet_id {
            revert_effect(&mut source, &old);
            if txn.is_expense() && txn.amount > source.amount {
                return Err(AhorrError::InsufficientFunds {
                    wallet: source.name,
                    needed: txn.amount.cents(),
                    available: source.amount.cents(),
                });
            }
            apply_effect(&mut source, &txn);

            self.store.transactions.upsert(txn.clone())?;
            self.store.wallets.upsert(source)?;
        } else {
            let mut target = self
                .store
                .wallets
                .get(txn.wallet_id)?
                .ok_or_else(|| AhorrError::wallet_not_found(txn.wallet_id.to_string()))?;

            revert_effect(&mut source, &old);
            if txn.is_expense() && txn.amount > target.amount {
                return Err(AhorrError::InsufficientFunds {
                    wallet: target.name,
                    needed: txn.amount.cents(),
                    available: target.amount.cents(),
                });
            }
            apply_effect(&mut target, &txn);

            self.store.transactions.upsert(txn.clone())?;
            self.store.wallets.upsert(source)?;
            self.store.wallets.upsert(target)?;
        }

        Ok(txn)
    }

    /// Delete a transaction, reverting its effect on the wallet's totals.
    pub fn delete(&self, id: TransactionId) -> AhorrResult<()> {
        let txn = self
            .store
            .transactions
            .get(id)?
            .ok_or_else(|| AhorrError::transaction_not_found(id.to_string()))?;

        // The wallet may already be gone if a cascade delete raced us;
        // removing the record is still correct then.
        if let Some(mut wallet) = self.store.wallets.get(txn.wallet_id)? {
            revert_effect(&mut wallet, &txn);
            self.store.wallets.upsert(wallet)?;
        }

        self.store.transactions.remove(id)?;
        Ok(())
    }
}
