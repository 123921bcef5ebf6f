//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::CategoryType;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Category type (expense or income)
        #[arg(short = 't', long = "type", default_value = "expense")]
        category_type: String,
        /// Icon shown before the name
        #[arg(long)]
        icon: Option<String>,
        /// Display color (e.g. "#4CAF50")
        #[arg(long)]
        color: Option<String>,
    },
    /// List all categories
    List,
    /// Delete a category that no transaction or budget uses
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> LedgerResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add {
            name,
            category_type,
            icon,
            color,
        } => {
            let category_type = CategoryType::parse(&category_type).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid category type: '{}'. Valid types: expense, income",
                    category_type
                ))
            })?;

            let category =
                service.create(&name, category_type, icon.as_deref(), color.as_deref())?;
            println!("Created {} category: {}", category.category_type, category);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List => {
            println!("{}", format_category_list(&service.list()?));
        }

        CategoryCommands::Delete { category } => {
            let found = service
                .find(&category)?
                .ok_or_else(|| LedgerError::category_not_found(&category))?;
            service.delete(found.id)?;
            println!("Deleted category: {}", found);
        }
    }

    Ok(())
}
