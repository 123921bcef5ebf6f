//! User CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_user_list, DisplayOptions};
use crate::error::LedgerResult;
use crate::services::UserService;
use crate::storage::Storage;

use super::resolve_user;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Add a new user
    Add {
        /// Email address (must be unique)
        email: String,
        /// Display name
        name: String,
    },
    /// List all users
    List,
    /// Delete a user with all their accounts, transactions and budgets
    Delete {
        /// User email or ID
        user: String,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UserCommands,
) -> LedgerResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Add { email, name } => {
            let user = service.create(&email, &name)?;
            println!("Created user: {}", user);
            println!("  ID: {}", user.id);
        }

        UserCommands::List => {
            let users = service.list()?;
            println!(
                "{}",
                format_user_list(&users, &DisplayOptions::from_settings(settings))
            );
        }

        UserCommands::Delete { user } => {
            let found = resolve_user(storage, &user)?;
            let removed = service.delete(found.id)?;
            println!("Deleted user: {}", found);
            println!(
                "  Removed {} account(s), {} transaction(s), {} budget(s)",
                removed.accounts, removed.transactions, removed.budgets
            );
        }
    }

    Ok(())
}
