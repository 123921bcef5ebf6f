//! Transaction CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_list, DisplayOptions};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountId, TransactionId};
use crate::services::{CategoryService, TransactionListOptions, TransactionService};
use crate::storage::Storage;

use super::{parse_date, parse_money};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Account ID
        account: String,
        /// Signed amount (negative for expenses, e.g. "-125.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by account ID
        #[arg(short, long)]
        account: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        transaction: String,
    },
}

fn parse_account_id(s: &str) -> LedgerResult<AccountId> {
    s.parse().map_err(|_| LedgerError::account_not_found(s))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);
    let options = DisplayOptions::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            account,
            amount,
            category,
            date,
            description,
        } => {
            let account_id = parse_account_id(&account)?;
            let category = CategoryService::new(storage)
                .find(&category)?
                .ok_or_else(|| LedgerError::category_not_found(&category))?;
            let amount = parse_money(&amount)?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => Local::now().date_naive(),
            };

            let txn = service.create(
                account_id,
                category.id,
                date,
                amount,
                description.as_deref(),
            )?;
            println!(
                "Recorded {} in {} on {}",
                options.money(txn.amount),
                category.name,
                options.date(txn.transaction_date)
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            account,
            from,
            to,
            limit,
        } => {
            let list_options = TransactionListOptions {
                account_id: account.as_deref().map(parse_account_id).transpose()?,
                category_id: None,
                from: from.as_deref().map(parse_date).transpose()?,
                to: to.as_deref().map(parse_date).transpose()?,
                limit: Some(limit),
            };
            let transactions = service.list(&list_options)?;
            println!("{}", format_transaction_list(&transactions, &options));
        }

        TransactionCommands::Delete { transaction } => {
            let id: TransactionId = transaction
                .parse()
                .map_err(|_| LedgerError::transaction_not_found(&transaction))?;
            service.delete(id)?;
            println!("Deleted transaction: {}", id);
        }
    }

    Ok(())
}
