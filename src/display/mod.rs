//! Plain-string formatting for the presentation layer

pub mod summary;
pub mod transaction;

pub use summary::{format_balance, format_summary};
pub use transaction::{
    format_amount, format_date, format_description, format_transaction_register,
    format_transaction_row,
};
