//! Budget CLI commands

use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_list, DisplayOptions};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetId, BudgetPeriod};
use crate::services::{BudgetService, CategoryService};
use crate::storage::Storage;

use super::{parse_date, parse_money, resolve_user};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a spending limit for a user and category
    Add {
        /// User email or ID
        user: String,
        /// Category name or ID
        category: String,
        /// Limit per period (e.g. "500.00")
        amount: String,
        /// Budget period (monthly or yearly)
        #[arg(short, long, default_value = "monthly")]
        period: String,
        /// First day the budget applies (YYYY-MM-DD, defaults to the 1st of this month)
        #[arg(short, long)]
        start: Option<String>,
    },
    /// List budgets
    List {
        /// Only budgets of this user (email or ID)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID
        budget: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let service = BudgetService::new(storage);
    let options = DisplayOptions::from_settings(settings);

    match cmd {
        BudgetCommands::Add {
            user,
            category,
            amount,
            period,
            start,
        } => {
            let owner = resolve_user(storage, &user)?;
            let category = CategoryService::new(storage)
                .find(&category)?
                .ok_or_else(|| LedgerError::category_not_found(&category))?;
            let amount = parse_money(&amount)?;
            let period = BudgetPeriod::parse(&period).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid budget period: '{}'. Valid periods: monthly, yearly",
                    period
                ))
            })?;
            let start = match start {
                Some(start) => parse_date(&start)?,
                None => first_of_current_month(),
            };

            let budget = service.create(owner.id, category.id, amount, period, start)?;
            println!(
                "Budgeted {} {} for {} ({})",
                options.money(budget.amount),
                budget.period,
                category.name,
                owner.name
            );
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::List { user } => {
            let owner = match user {
                Some(user) => Some(resolve_user(storage, &user)?.id),
                None => None,
            };
            println!("{}", format_budget_list(&service.list(owner)?, &options));
        }

        BudgetCommands::Delete { budget } => {
            let id: BudgetId = budget
                .parse()
                .map_err(|_| LedgerError::budget_not_found(&budget))?;
            service.delete(id)?;
            println!("Deleted budget: {}", id);
        }
    }

    Ok(())
}

fn first_of_current_month() -> NaiveDate {
    let today = Local::now().date_naive();
    today.with_day(1).unwrap_or(today)
}
