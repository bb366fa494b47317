//! Transaction display formatting
//!
//! Renders transactions the way the mobile client shows them: signed
//! amounts with Spanish digit grouping (`1.234,56`), `dd/mm/yyyy` dates,
//! and a placeholder for empty descriptions.

use chrono::NaiveDateTime;

use crate::models::{Money, Transaction};

/// Group a non-negative amount with Spanish separators, e.g. `"2.500,00"`.
fn group_es(amount: Money) -> String {
    let abs = amount.abs();
    let int_part = abs.units().to_string();

    let with_dots: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    format!("{},{:02}", with_dots, abs.cents_part())
}

/// Format a transaction amount with its sign prefix, e.g. `"- $120,50"`
/// for an expense or `"+ $2.500,00"` for an income.
pub fn format_amount(txn: &Transaction) -> String {
    let prefix = if txn.is_expense() { "- " } else { "+ " };
    format!("{}${}", prefix, group_es(txn.amount))
}

/// Format a transaction date as `dd/mm/yyyy`; records without a timestamp
/// render as a dash placeholder.
pub fn format_date(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "--/--/----".to_string(),
    }
}

/// The description line, falling back to the client's placeholder text.
pub fn format_description(txn: &Transaction) -> &str {
    if txn.description.is_empty() {
        "Sin descripción"
    } else {
        &txn.description
    }
}

/// Format a single transaction for display (list row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {:20} {:>14}",
        format_date(txn.date),
        txn.category.label(),
        format_amount(txn)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No hay transacciones.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:>14}\n",
        "Fecha", "Categoría", "Monto"
    ));
    output.push_str(&"-".repeat(47));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKey, TransactionKind, WalletId};
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, cents: i64) -> Transaction {
        Transaction::new(
            WalletId::new(),
            kind,
            Money::from_cents(cents),
            CategoryKey::Groceries,
            NaiveDate::from_ymd_opt(2025, 1, 2)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_format_amount_expense() {
        assert_eq!(
            format_amount(&txn(TransactionKind::Expense, 12050)),
            "- $120,50"
        );
    }

    #[test]
    fn test_format_amount_income_grouped() {
        assert_eq!(
            format_amount(&txn(TransactionKind::Income, 250000)),
            "+ $2.500,00"
        );
        assert_eq!(
            format_amount(&txn(TransactionKind::Income, 123456789)),
            "+ $1.234.567,89"
        );
    }

    #[test]
    fn test_format_date() {
        let record = txn(TransactionKind::Expense, 100);
        assert_eq!(format_date(record.date), "02/01/2025");
        assert_eq!(format_date(None), "--/--/----");
    }

    #[test]
    fn test_description_placeholder() {
        let mut record = txn(TransactionKind::Expense, 100);
        assert_eq!(format_description(&record), "Sin descripción");

        record.description = "Gasolina".into();
        assert_eq!(format_description(&record), "Gasolina");
    }

    #[test]
    fn test_register_contains_rows() {
        let records = vec![
            txn(TransactionKind::Expense, 12050),
            txn(TransactionKind::Income, 250000),
        ];
        let register = format_transaction_register(&records);
        assert!(register.contains("- $120,50"));
        assert!(register.contains("+ $2.500,00"));
        assert!(register.contains("Supermercado"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[]), "No hay transacciones.\n");
    }
}
