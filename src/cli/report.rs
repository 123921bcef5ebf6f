//! Report CLI commands
//!
//! Every report is computed from a snapshot of the ledger and printed either
//! as a table or as machine-readable rows.

use std::io::Write;
use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::{
    format_balance_report, format_budget_status_report, format_income_expense_report,
    format_spending_report, DisplayOptions,
};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{write_rows, ExportFormat};
use crate::models::{PeriodKind, ReportPeriod, UserId};
use crate::reports::{Aggregator, LedgerSnapshot, TransactionFilter};
use crate::storage::Storage;

use super::{open_output, parse_date, resolve_user};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

impl OutputFormat {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Table => None,
            Self::Csv => Some(ExportFormat::Csv),
            Self::Json => Some(ExportFormat::Json),
            Self::Yaml => Some(ExportFormat::Yaml),
        }
    }
}

/// Where and how a report is written
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending by category for one month
    Monthly {
        /// Month to report (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
        /// Only this user's accounts (email or ID)
        #[arg(short, long)]
        user: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Spending by category for one year
    Yearly {
        /// Year to report (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Only this user's accounts (email or ID)
        #[arg(short, long)]
        user: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Account balances grouped by user and account type
    Balances {
        /// Only this user (email or ID)
        #[arg(short, long)]
        user: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Monthly budgets compared with actual spending
    Budget {
        /// Month to report (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Income and expense totals over a date range
    Income {
        /// First day (YYYY-MM-DD, defaults to the 1st of this month)
        #[arg(long)]
        start: Option<String>,
        /// Last day (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        end: Option<String>,
        /// Only this user's accounts (email or ID)
        #[arg(short, long)]
        user: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// A user's largest expense categories
    Top {
        /// User email or ID
        user: String,
        /// Number of categories (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<i32>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let options = DisplayOptions::from_settings(settings);

    match cmd {
        ReportCommands::Monthly {
            period,
            user,
            output,
        } => {
            let (year, month) = month_arg(period.as_deref())?;
            let user = user_filter(storage, user.as_deref())?;
            let period = ReportPeriod::month(year, month)?;

            let snapshot = capture(storage, &period)?;
            let rows =
                Aggregator::new(&snapshot).monthly_spending_by_category(year, month, user)?;
            emit(&rows, &output, || {
                format_spending_report(&format!("Spending for {}", period), &rows, &options)
            })
        }

        ReportCommands::Yearly { year, user, output } => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let user = user_filter(storage, user.as_deref())?;
            let period = ReportPeriod::year(year)?;

            let snapshot = capture(storage, &period)?;
            let rows = Aggregator::new(&snapshot).yearly_spending_by_category(year, user)?;
            let title = format!("Spending for the year {}", period.year_number());
            emit(&rows, &output, || format_spending_report(&title, &rows, &options))
        }

        ReportCommands::Balances { user, output } => {
            let user = user_filter(storage, user.as_deref())?;

            let snapshot = LedgerSnapshot::capture(storage, &TransactionFilter::all())?;
            let rows = Aggregator::new(&snapshot).account_balances(user)?;
            emit(&rows, &output, || format_balance_report(&rows, &options))
        }

        ReportCommands::Budget { period, output } => {
            let (year, month) = month_arg(period.as_deref())?;
            let period = ReportPeriod::month(year, month)?;

            let snapshot = capture(storage, &period)?;
            let rows = Aggregator::new(&snapshot).budget_status(year, month)?;
            emit(&rows, &output, || {
                format_budget_status_report(&format!("Budgets for {}", period), &rows, &options)
            })
        }

        ReportCommands::Income {
            start,
            end,
            user,
            output,
        } => {
            let today = Local::now().date_naive();
            let start = match start {
                Some(start) => parse_date(&start)?,
                None => today.with_day(1).unwrap_or(today),
            };
            let end = match end {
                Some(end) => parse_date(&end)?,
                None => today,
            };
            let user = user_filter(storage, user.as_deref())?;

            let filter = TransactionFilter::between(start, end);
            let snapshot = LedgerSnapshot::capture(storage, &filter)?;
            let summary = Aggregator::new(&snapshot).income_expense_summary(start, end, user)?;
            emit(std::slice::from_ref(&summary), &output, || {
                format_income_expense_report(&summary, &options)
            })
        }

        ReportCommands::Top {
            user,
            count,
            output,
        } => {
            let owner = resolve_user(storage, &user)?;
            let count = count.unwrap_or(settings.default_top_count);

            let snapshot = LedgerSnapshot::capture(storage, &TransactionFilter::all())?;
            let rows = Aggregator::new(&snapshot).top_spending_categories(owner.id, count)?;
            let title = format!("Top spending for {}", owner.name);
            emit(&rows, &output, || format_spending_report(&title, &rows, &options))
        }
    }
}

/// Print a table, or write rows in the chosen machine format
fn emit<T, F>(rows: &[T], output: &OutputArgs, table: F) -> LedgerResult<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    let mut writer = open_output(output.output.as_deref())?;
    match output.format.export_format() {
        Some(format) => write_rows(rows, format, &mut writer)?,
        None => writeln!(writer, "{}", table())?,
    }
    writer.flush()?;
    Ok(())
}

fn capture(storage: &Storage, period: &ReportPeriod) -> LedgerResult<LedgerSnapshot> {
    let filter = TransactionFilter::between(period.start_date(), period.end_date());
    LedgerSnapshot::capture(storage, &filter)
}

fn user_filter(storage: &Storage, user: Option<&str>) -> LedgerResult<Option<UserId>> {
    user.map(|u| resolve_user(storage, u).map(|found| found.id))
        .transpose()
}

/// Year and month from a `YYYY-MM` argument, or the current month
fn month_arg(arg: Option<&str>) -> LedgerResult<(i32, u32)> {
    let period = match arg {
        Some(arg) => ReportPeriod::parse(arg)?,
        None => ReportPeriod::current_month(),
    };
    match period.kind() {
        PeriodKind::Month { year, month } => Ok((year, month)),
        PeriodKind::Year { year } => Err(LedgerError::InvalidArgument(format!(
            "expected a month (YYYY-MM), got the year {}",
            year
        ))),
    }
}
