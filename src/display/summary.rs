//! Summary display formatting
//!
//! Renders the live statistics panel as plain text: current balance,
//! transaction count, savings rate, and budget usage with one-decimal
//! percentages.

use crate::models::Money;
use crate::reports::TransactionSummary;

/// Format a balance-style amount without decimals, e.g. `"$12.345"`.
/// Negative balances keep their sign: `"-$1.200"`.
pub fn format_balance(amount: Money) -> String {
    let int_part = amount.abs().units().to_string();
    let with_dots: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    if amount.is_negative() {
        format!("-${}", with_dots)
    } else {
        format!("${}", with_dots)
    }
}

/// Format the statistics panel
pub fn format_summary(summary: &TransactionSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Balance actual:     {}\n",
        format_balance(summary.balance)
    ));
    output.push_str(&format!(
        "Transacciones:      {}\n",
        summary.total_transactions
    ));
    output.push_str(&format!(
        "Tasa de ahorro:     {:.1}%\n",
        summary.savings_rate
    ));
    output.push_str(&format!(
        "Presupuesto usado:  {:.1}%\n",
        summary.budget_used
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> TransactionSummary {
        TransactionSummary {
            total_income: Money::from_cents(1_234_567),
            total_expenses: Money::from_cents(400_000),
            balance: Money::from_cents(834_567),
            savings_rate: 67.6,
            monthly_expenses: Money::from_cents(400_000),
            budget_used: 100.0,
            total_transactions: 12,
        }
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(Money::from_cents(1_234_567)), "$12.345");
        assert_eq!(format_balance(Money::from_cents(0)), "$0");
        assert_eq!(format_balance(Money::from_cents(-120_000)), "-$1.200");
    }

    #[test]
    fn test_format_summary_lines() {
        let text = format_summary(&sample_summary());
        assert!(text.contains("Balance actual:     $8.345"));
        assert!(text.contains("Transacciones:      12"));
        assert!(text.contains("Tasa de ahorro:     67.6%"));
        assert!(text.contains("Presupuesto usado:  100.0%"));
    }
}
