//! Live transaction statistics
//!
//! Reduces a full transaction snapshot into the summary shown next to the
//! transaction list: totals, signed balance, savings rate, and budget usage
//! for the current calendar month. Recomputed fresh on every call; nothing
//! is cached or persisted.

use chrono::{Datelike, NaiveDateTime};

use crate::models::{Money, Transaction};

/// Aggregated statistics derived from a transaction snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts
    pub total_expenses: Money,
    /// `total_income - total_expenses`; may be negative
    pub balance: Money,
    /// Percent of income kept, 0 when there is no income
    pub savings_rate: f64,
    /// Expenses dated in the reference calendar month
    pub monthly_expenses: Money,
    /// Percent of the monthly budget consumed, clamped to 100
    pub budget_used: f64,
    /// Count of the full (unfiltered) snapshot
    pub total_transactions: usize,
}

impl TransactionSummary {
    /// Compute the summary against an explicit reference instant.
    ///
    /// `budget_limit` is the configured monthly expense ceiling. Every
    /// percentage is finite: zero income and a zero budget both resolve
    /// to 0 rather than dividing.
    pub fn generate(
        transactions: &[Transaction],
        budget_limit: Money,
        now: NaiveDateTime,
    ) -> Self {
        let total_income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();

        let total_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        let balance = total_income - total_expenses;

        let savings_rate = if total_income.is_positive() {
            (balance.cents() as f64 / total_income.cents() as f64) * 100.0
        } else {
            0.0
        };

        let monthly_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .filter(|t| {
                t.date
                    .is_some_and(|d| d.year() == now.year() && d.month() == now.month())
            })
            .map(|t| t.amount)
            .sum();

        let budget_used = if budget_limit.is_positive() {
            let used = (monthly_expenses.cents() as f64 / budget_limit.cents() as f64) * 100.0;
            used.min(100.0)
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            balance,
            savings_rate,
            monthly_expenses,
            budget_used,
            total_transactions: transactions.len(),
        }
    }

    /// Compute the summary against the wall clock.
    pub fn generate_now(transactions: &[Transaction], budget_limit: Money) -> Self {
        Self::generate(
            transactions,
            budget_limit,
            chrono::Local::now().naive_local(),
        )
    }
}
