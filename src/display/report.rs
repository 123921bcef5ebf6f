//! Report formatting for terminal output

use crate::reports::{AccountBalanceSummary, BudgetStatus, IncomeExpenseSummary, SpendingByCategory};

use super::{format_percent, render_table, DisplayOptions};

/// Format spending-by-category rows under a title
pub fn format_spending_report(
    title: &str,
    rows: &[SpendingByCategory],
    options: &DisplayOptions,
) -> String {
    if rows.is_empty() {
        return format!("{}\n\nNo transactions in this period.", title);
    }

    let table_rows = rows
        .iter()
        .map(|r| {
            vec![
                r.category_name.clone(),
                r.category_type.to_string(),
                options.money(r.total_amount),
                r.transaction_count.to_string(),
            ]
        })
        .collect();

    let table = render_table(
        &["Category", "Type", "Total", "Transactions"],
        table_rows,
        &[2, 3],
    );
    format!("{}\n\n{}", title, table)
}

/// Format account balance rollups
pub fn format_balance_report(rows: &[AccountBalanceSummary], options: &DisplayOptions) -> String {
    if rows.is_empty() {
        return "No accounts found.".to_string();
    }

    let table_rows = rows
        .iter()
        .map(|r| {
            vec![
                r.user_name.clone(),
                r.account_type.to_string(),
                r.account_count.to_string(),
                options.money(r.total_balance),
            ]
        })
        .collect();

    render_table(&["User", "Type", "Accounts", "Balance"], table_rows, &[2, 3])
}

/// Format budget-versus-actual rows
pub fn format_budget_status_report(
    title: &str,
    rows: &[BudgetStatus],
    options: &DisplayOptions,
) -> String {
    if rows.is_empty() {
        return format!("{}\n\nNo monthly budgets found.", title);
    }

    let table_rows = rows
        .iter()
        .map(|r| {
            vec![
                r.user_name.clone(),
                r.category_name.clone(),
                options.money(r.budget_amount),
                options.money(r.spent_amount),
                options.money(r.remaining_amount),
                format_percent(r.percent_used),
                if r.is_over_budget { "OVER" } else { "" }.to_string(),
            ]
        })
        .collect();

    let table = render_table(
        &["User", "Category", "Budget", "Spent", "Remaining", "Used", ""],
        table_rows,
        &[2, 3, 4, 5],
    );
    format!("{}\n\n{}", title, table)
}

/// Format an income/expense summary
pub fn format_income_expense_report(
    summary: &IncomeExpenseSummary,
    options: &DisplayOptions,
) -> String {
    let title = format!(
        "Income & Expenses: {} to {}",
        options.date(summary.start_date),
        options.date(summary.end_date)
    );

    let table = render_table(
        &["", "Amount"],
        vec![
            vec!["Income".into(), options.money(summary.total_income)],
            vec!["Expenses".into(), options.money(summary.total_expenses)],
            vec!["Net".into(), options.money(summary.net_amount)],
        ],
        &[1],
    );
    format!("{}\n\n{}", title, table)
}
