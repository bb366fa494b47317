//! Predicate filter
//!
//! Narrows a transaction snapshot by type or by time window. Time windows
//! are computed from an explicit reference instant so the filter itself is
//! deterministic; only the `*_now` entry point reads the wall clock.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::Transaction;

/// The six filter keys offered by the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    /// Keep everything
    #[default]
    All,
    /// Keep income transactions only
    Income,
    /// Keep expense transactions only
    Expense,
    /// Keep transactions dated on the reference calendar day
    Today,
    /// Keep transactions on/after midnight of the most recent Sunday
    Week,
    /// Keep transactions on/after midnight of the 1st of the month
    Month,
}

impl TransactionFilter {
    /// All filter keys in display order
    pub fn all_keys() -> &'static [TransactionFilter] {
        use TransactionFilter::*;
        &[All, Income, Expense, Today, Week, Month]
    }

    /// Parse a filter key string. Unknown keys resolve to `All` (identity).
    pub fn parse(s: &str) -> TransactionFilter {
        match s {
            "income" => Self::Income,
            "expense" => Self::Expense,
            "today" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::All,
        }
    }

    /// The raw key string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Whether a transaction satisfies this filter relative to `now`.
    ///
    /// Transactions without a timestamp never match a time window but pass
    /// the type filters and `All`.
    pub fn matches(&self, txn: &Transaction, now: NaiveDateTime) -> bool {
        match self {
            Self::All => true,
            Self::Income => txn.is_income(),
            Self::Expense => txn.is_expense(),
            Self::Today => txn.calendar_date() == Some(now.date()),
            Self::Week => match txn.date {
                Some(date) => date >= week_start(now.date()).and_time(NaiveTime::MIN),
                None => false,
            },
            Self::Month => match txn.date {
                Some(date) => date >= month_start(now.date()).and_time(NaiveTime::MIN),
                None => false,
            },
        }
    }
}

impl std::fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The most recent Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The first day of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Apply `filter` to a snapshot, preserving the order of matching records.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: TransactionFilter,
    now: NaiveDateTime,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| filter.matches(txn, now))
        .cloned()
        .collect()
}

/// Convenience wrapper that captures the wall clock. Everything below this
/// entry point is deterministic.
pub fn filter_transactions_now(
    transactions: &[Transaction],
    filter: TransactionFilter,
) -> Vec<Transaction> {
    filter_transactions(transactions, filter, chrono::Local::now().naive_local())
}
