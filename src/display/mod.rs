//! Display formatting for terminal output
//!
//! Renders records and report rows as `tabled` tables. Money is printed
//! with the configured currency symbol and percentages are rounded to two
//! places here, never earlier.

pub mod account;
pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use account::{format_account_list, format_user_list};
pub use budget::format_budget_list;
pub use category::format_category_list;
pub use report::{
    format_balance_report, format_budget_status_report, format_income_expense_report,
    format_spending_report,
};
pub use transaction::format_transaction_list;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::config::settings::Settings;
use crate::models::Money;

/// Presentation preferences taken from settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl DisplayOptions {
    /// Build options from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    /// Format an amount with the configured symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured pattern
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

/// Format a percentage rounded to two decimal places
pub fn format_percent(pct: Decimal) -> String {
    format!("{:.2}%", pct.round_dp(2))
}

/// Build a rounded table from a header and rows
///
/// Columns listed in `numeric` are right-aligned.
pub(crate) fn render_table(
    header: &[&str],
    rows: Vec<Vec<String>>,
    numeric: &[usize],
) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    for &column in numeric {
        table.modify(Columns::single(column), Alignment::right());
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_percent_rounds_only_for_display() {
        let pct = Decimal::from_str("33.333333").unwrap();
        assert_eq!(format_percent(pct), "33.33%");
        assert_eq!(format_percent(Decimal::from_str("44.85").unwrap()), "44.85%");
        assert_eq!(format_percent(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn test_display_options() {
        let options = DisplayOptions {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
        };
        assert_eq!(options.money(Money::from_cents(-12550)), "-€125.50");
        assert_eq!(
            options.date(NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()),
            "05/10/2024"
        );
    }

    #[test]
    fn test_render_table_contains_cells() {
        let table = render_table(
            &["Name", "Total"],
            vec![vec!["Groceries".into(), "$224.25".into()]],
            &[1],
        );
        assert!(table.contains("Name"));
        assert!(table.contains("Groceries"));
        assert!(table.contains("$224.25"));
    }
}
