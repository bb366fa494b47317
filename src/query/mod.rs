//! Transaction query pipeline
//!
//! The presentation layer holds three pieces of list state: the active
//! filter key, the search text, and the sort order. On every state change
//! it hands the current snapshot plus that state to [`TransactionQuery`],
//! which recomputes the derived view as a pure function: filter, then
//! search, then sort. Nothing here caches or mutates its input.

pub mod filter;
pub mod search;
pub mod sort;

pub use filter::{filter_transactions, filter_transactions_now, TransactionFilter};
pub use search::search_transactions;
pub use sort::{sort_transactions, SortKey};

use chrono::NaiveDateTime;

use crate::models::Transaction;

/// The list state driving the derived transaction view
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Active filter key
    pub filter: TransactionFilter,
    /// Free-text search query (empty means no search)
    pub search: String,
    /// Sort order; `None` leaves the filtered sequence as-is
    pub sort: Option<SortKey>,
}

impl TransactionQuery {
    /// Create an empty query (keep everything, original order)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter key
    pub fn filter(mut self, filter: TransactionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Recompute the derived view against an explicit reference instant.
    pub fn apply(&self, transactions: &[Transaction], now: NaiveDateTime) -> Vec<Transaction> {
        let filtered = filter_transactions(transactions, self.filter, now);
        let searched = search_transactions(&filtered, &self.search);
        match self.sort {
            Some(key) => sort_transactions(&searched, key),
            None => searched,
        }
    }

    /// Recompute the derived view against the wall clock.
    pub fn apply_now(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        self.apply(transactions, chrono::Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKey, Money, TransactionKind, WalletId};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn txn(
        kind: TransactionKind,
        cents: i64,
        category: CategoryKey,
        date: NaiveDateTime,
        description: &str,
    ) -> Transaction {
        Transaction::with_description(
            WalletId::new(),
            kind,
            Money::from_cents(cents),
            category,
            date,
            description,
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(
                TransactionKind::Expense,
                12050,
                CategoryKey::Groceries,
                at(2025, 6, 18),
                "Compras del supermercado",
            ),
            txn(
                TransactionKind::Income,
                250000,
                CategoryKey::Salary,
                at(2025, 6, 17),
                "Salario mensual",
            ),
            txn(
                TransactionKind::Expense,
                4599,
                CategoryKey::Dining,
                at(2025, 6, 2),
                "Almuerzo en restaurante",
            ),
        ]
    }

    #[test]
    fn test_default_query_is_identity() {
        let txns = sample();
        let out = TransactionQuery::new().apply(&txns, at(2025, 6, 18));
        assert_eq!(out.len(), txns.len());
        for (a, b) in out.iter().zip(txns.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_filter_then_search_then_sort() {
        let txns = sample();
        let query = TransactionQuery::new()
            .filter(TransactionFilter::Expense)
            .search("a")
            .sort(SortKey::AmountDesc);

        let out = query.apply(&txns, at(2025, 6, 18));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].amount, Money::from_cents(12050));
        assert_eq!(out[1].amount, Money::from_cents(4599));
    }

    #[test]
    fn test_week_filter_composes_with_sort() {
        // Week of 2025-06-18 starts Sunday 2025-06-15; the June 2nd record
        // falls out before sorting.
        let txns = sample();
        let query = TransactionQuery::new()
            .filter(TransactionFilter::Week)
            .sort(SortKey::DateAsc);

        let out = query.apply(&txns, at(2025, 6, 18));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date, Some(at(2025, 6, 17)));
    }

    #[test]
    fn test_unparsed_sort_key_leaves_order() {
        let txns = sample();
        let mut query = TransactionQuery::new();
        query.sort = SortKey::parse("not-a-key");

        let out = query.apply(&txns, at(2025, 6, 18));
        let ids: Vec<_> = out.iter().map(|t| t.id).collect();
        let original: Vec<_> = txns.iter().map(|t| t.id).collect();
        assert_eq!(ids, original);
    }

    #[test]
    fn test_repeated_application_is_idempotent() {
        let txns = sample();
        let query = TransactionQuery::new()
            .filter(TransactionFilter::Expense)
            .sort(SortKey::DateDesc);

        let once = query.apply(&txns, at(2025, 6, 18));
        let twice = query.apply(&once, at(2025, 6, 18));
        let once_ids: Vec<_> = once.iter().map(|t| t.id).collect();
        let twice_ids: Vec<_> = twice.iter().map(|t| t.id).collect();
        assert_eq!(once_ids, twice_ids);
    }
}
