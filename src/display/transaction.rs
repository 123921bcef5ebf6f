//! Transaction display formatting

use crate::models::Transaction;

use super::{render_table, DisplayOptions};

/// Format a list of transactions as a register table
pub fn format_transaction_list(transactions: &[Transaction], options: &DisplayOptions) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                options.date(t.transaction_date),
                t.account_id.to_string(),
                t.category_id.to_string(),
                options.money(t.amount),
                t.description.clone().unwrap_or_default(),
            ]
        })
        .collect();

    render_table(
        &["ID", "Date", "Account", "Category", "Amount", "Description"],
        rows,
        &[4],
    )
}
