use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_lens::cli::{
    handle_account_command, handle_budget_command, handle_category_command,
    handle_export_command, handle_report_command, handle_transaction_command,
    handle_user_command, AccountCommands, BudgetCommands, CategoryCommands, ExportArgs,
    ReportCommands, TransactionCommands, UserCommands,
};
use ledger_lens::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use ledger_lens::logging::init_tracing;
use ledger_lens::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger with spending, balance and budget reports",
    long_about = "Ledger Lens keeps users, accounts, categories, transactions and \
                  budgets in a local data directory and aggregates them into \
                  spending, balance, budget and income reports."
)]
struct Cli {
    /// Data directory (defaults to the platform configuration directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the whole ledger
    Export(ExportArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Ledger Lens at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  ledger user add <email> <name>");
            println!("  ledger category add <name> --type expense");
        }
        Some(Commands::Config) => {
            println!("Ledger Lens Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Initialized:    {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!(
                "  Currency:          {} ({})",
                settings.currency_code, settings.currency_symbol
            );
            println!("  Date format:       {}", settings.date_format);
            println!("  Top categories:    {}", settings.default_top_count);
        }
        Some(Commands::User(cmd)) => handle_user_command(&storage, &settings, cmd)?,
        Some(Commands::Account(cmd)) => handle_account_command(&storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?
        }
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        None => {
            println!("Ledger Lens - personal finance ledger and reports");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger init' to create the data directory.");
        }
    }

    Ok(())
}
