//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_account_list, DisplayOptions};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountId, AccountType};
use crate::services::AccountService;
use crate::storage::Storage;

use super::{parse_money, resolve_user};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account for a user
    Add {
        /// Owner email or ID
        user: String,
        /// Account name
        name: String,
        /// Account type (checking, savings, credit, cash, investment)
        #[arg(short = 't', long = "type", default_value = "checking")]
        account_type: String,
        /// Current balance (e.g., "1000.00" or "-250")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
        /// ISO currency code (defaults to the configured currency)
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// List accounts
    List {
        /// Only accounts owned by this user (email or ID)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Delete an account and its transactions
    Delete {
        /// Account ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> LedgerResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add {
            user,
            name,
            account_type,
            balance,
            currency,
        } => {
            let owner = resolve_user(storage, &user)?;
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, credit, cash, investment",
                    account_type
                ))
            })?;
            let balance = parse_money(&balance)?;
            let currency = currency.unwrap_or_else(|| settings.currency_code.clone());

            let account =
                service.create(owner.id, &name, account_type, balance, Some(&currency))?;

            let options = DisplayOptions::from_settings(settings);
            println!("Created account: {}", account);
            println!("  Owner: {}", owner);
            println!("  Balance: {} {}", options.money(account.balance), account.currency);
            println!("  ID: {}", account.id);
        }

        AccountCommands::List { user } => {
            let owner = match user {
                Some(user) => Some(resolve_user(storage, &user)?.id),
                None => None,
            };
            let accounts = service.list(owner)?;
            println!(
                "{}",
                format_account_list(&accounts, &DisplayOptions::from_settings(settings))
            );
        }

        AccountCommands::Delete { account } => {
            let id: AccountId = account
                .parse()
                .map_err(|_| LedgerError::account_not_found(&account))?;
            let found = service.require(id)?;
            let removed = service.delete(id)?;
            println!("Deleted account: {}", found);
            println!("  Removed {} transaction(s)", removed);
        }
    }

    Ok(())
}
