//! Search matcher
//!
//! Free-text narrowing of a transaction snapshot. A record matches when the
//! query appears as a substring of its resolved category label, its
//! description, or the plain decimal form of its amount. Label and
//! description matching is case-insensitive; the amount string is matched
//! against the raw query.

use crate::models::Transaction;

/// Whether a single transaction matches a non-empty query.
fn matches_query(txn: &Transaction, query: &str, query_lower: &str) -> bool {
    txn.category.label().to_lowercase().contains(query_lower)
        || txn.description.to_lowercase().contains(query_lower)
        || txn.amount.plain().contains(query)
}

/// Apply a free-text query to a snapshot, preserving the order of matching
/// records. The empty query returns the snapshot untouched without scanning
/// any fields.
pub fn search_transactions(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    if query.is_empty() {
        return transactions.to_vec();
    }

    let query_lower = query.to_lowercase();
    transactions
        .iter()
        .filter(|txn| matches_query(txn, query, &query_lower))
        .cloned()
        .collect()
}
