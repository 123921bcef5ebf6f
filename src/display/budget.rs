//! Budget display formatting

use crate::models::Budget;

use super::{render_table, DisplayOptions};

/// Format a list of budgets as a table
pub fn format_budget_list(budgets: &[Budget], options: &DisplayOptions) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    let rows = budgets
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                b.user_id.to_string(),
                b.category_id.to_string(),
                b.period.to_string(),
                options.money(b.amount),
                options.date(b.start_date),
            ]
        })
        .collect();

    render_table(
        &["ID", "User", "Category", "Period", "Limit", "Starts"],
        rows,
        &[4],
    )
}
