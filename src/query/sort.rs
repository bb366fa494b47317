//! Sort comparator
//!
//! Orders a transaction snapshot by one of five selectable keys. The input
//! is never mutated: sorting copies the slice and runs a stable sort, so
//! ties keep their original relative order.

use crate::models::Transaction;

/// The selectable sort orders for the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
    /// Resolved category label, ascending
    Category,
}

impl SortKey {
    /// All sort keys in display order
    pub fn all_keys() -> &'static [SortKey] {
        use SortKey::*;
        &[DateDesc, DateAsc, AmountDesc, AmountAsc, Category]
    }

    /// Parse a sort key string. Unknown keys yield `None`, which callers
    /// treat as "leave the sequence as-is".
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "date-desc" => Some(Self::DateDesc),
            "date-asc" => Some(Self::DateAsc),
            "amount-desc" => Some(Self::AmountDesc),
            "amount-asc" => Some(Self::AmountAsc),
            "category" => Some(Self::Category),
            _ => None,
        }
    }

    /// The raw key string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::AmountDesc => "amount-desc",
            Self::AmountAsc => "amount-asc",
            Self::Category => "category",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Return a sorted copy of the snapshot. Records without a timestamp order
/// before every dated record on the date keys.
pub fn sort_transactions(transactions: &[Transaction], key: SortKey) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();

    match key {
        SortKey::DateDesc => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::DateAsc => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::AmountDesc => sorted.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortKey::AmountAsc => sorted.sort_by(|a, b| a.amount.cmp(&b.amount)),
        SortKey::Category => sorted.sort_by(|a, b| {
            a.category
                .label()
                .to_lowercase()
                .cmp(&b.category.label().to_lowercase())
        }),
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKey, Money, TransactionKind, WalletId};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn txn(cents: i64, category: CategoryKey, date: NaiveDateTime) -> Transaction {
        Transaction::new(
            WalletId::new(),
            TransactionKind::Expense,
            Money::from_cents(cents),
            category,
            date,
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(12050, CategoryKey::Groceries, at(2025, 1, 2)),
            txn(250000, CategoryKey::Salary, at(2025, 1, 1)),
            txn(4599, CategoryKey::Dining, at(2025, 1, 3)),
        ]
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(SortKey::parse("date-desc"), Some(SortKey::DateDesc));
        assert_eq!(SortKey::parse("amount-asc"), Some(SortKey::AmountAsc));
        assert_eq!(SortKey::parse("category"), Some(SortKey::Category));
        assert_eq!(SortKey::parse("newest"), None);
    }

    #[test]
    fn test_roundtrip() {
        for key in SortKey::all_keys() {
            assert_eq!(Some(*key), SortKey::parse(key.as_str()));
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let txns = sample();
        let before: Vec<_> = txns.iter().map(|t| t.id).collect();
        let _ = sort_transactions(&txns, SortKey::AmountDesc);
        let after: Vec<_> = txns.iter().map(|t| t.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_date_ordering() {
        let txns = sample();

        let desc = sort_transactions(&txns, SortKey::DateDesc);
        assert_eq!(desc[0].date, Some(at(2025, 1, 3)));
        assert_eq!(desc[2].date, Some(at(2025, 1, 1)));

        let asc = sort_transactions(&txns, SortKey::DateAsc);
        assert_eq!(asc[0].date, Some(at(2025, 1, 1)));
    }

    #[test]
    fn test_date_round_trip() {
        // With unique dates, descending is exactly ascending reversed
        let txns = sample();
        let mut desc = sort_transactions(&txns, SortKey::DateDesc);
        desc.reverse();
        let asc = sort_transactions(&txns, SortKey::DateAsc);

        let desc_ids: Vec<_> = desc.iter().map(|t| t.id).collect();
        let asc_ids: Vec<_> = asc.iter().map(|t| t.id).collect();
        assert_eq!(desc_ids, asc_ids);
    }

    #[test]
    fn test_amount_ordering() {
        let txns = sample();

        let desc = sort_transactions(&txns, SortKey::AmountDesc);
        assert_eq!(desc[0].amount, Money::from_cents(250000));
        assert_eq!(desc[2].amount, Money::from_cents(4599));

        let asc = sort_transactions(&txns, SortKey::AmountAsc);
        assert_eq!(asc[0].amount, Money::from_cents(4599));
    }

    #[test]
    fn test_category_orders_by_label() {
        let txns = sample();
        let sorted = sort_transactions(&txns, SortKey::Category);
        // Restaurantes < Salario < Supermercado
        assert_eq!(sorted[0].category, CategoryKey::Dining);
        assert_eq!(sorted[1].category, CategoryKey::Salary);
        assert_eq!(sorted[2].category, CategoryKey::Groceries);
    }

    #[test]
    fn test_stable_on_equal_keys() {
        // All-equal amounts: original relative order must survive
        let txns = vec![
            txn(1000, CategoryKey::Others, at(2025, 1, 1)),
            txn(1000, CategoryKey::Others, at(2025, 1, 2)),
            txn(1000, CategoryKey::Others, at(2025, 1, 3)),
        ];
        let ids: Vec<_> = txns.iter().map(|t| t.id).collect();

        let sorted = sort_transactions(&txns, SortKey::AmountDesc);
        let sorted_ids: Vec<_> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, sorted_ids);
    }

    #[test]
    fn test_missing_dates_order_before_dated() {
        let mut undated = txn(500, CategoryKey::Others, at(2025, 1, 1));
        undated.date = None;
        let txns = vec![txn(1000, CategoryKey::Others, at(2025, 1, 2)), undated];

        let asc = sort_transactions(&txns, SortKey::DateAsc);
        assert!(asc[0].date.is_none());

        let desc = sort_transactions(&txns, SortKey::DateDesc);
        assert!(desc[1].date.is_none());
    }
}
