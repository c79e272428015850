//! Transaction CLI commands

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use super::category::find_category;
use super::{fetch, CliContext};
use crate::display::transaction::{format_import_preview, format_transaction_list};
use crate::error::{PlannerError, PlannerResult};
use crate::models::TransactionFilter;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions (the selected year by default)
    List {
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Upload a bank statement for parsing
    Import {
        /// Path to the statement file
        file: PathBuf,
        /// Create the parsed transactions right away
        #[arg(long)]
        save: bool,
    },
}

fn parse_date(s: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| PlannerError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s)))
}

/// Handle a transaction command
pub async fn handle_transaction_command(
    ctx: &CliContext,
    cmd: TransactionCommands,
) -> PlannerResult<()> {
    let api = ctx.api()?;

    match cmd {
        TransactionCommands::List { category, from, to } => {
            let categories = api.list_categories().await?;

            let mut filter = TransactionFilter::for_year(ctx.year);
            if let Some(from) = from {
                filter.start_date = Some(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter.end_date = Some(parse_date(&to)?);
            }
            if let Some(category) = category {
                filter = filter.with_category(find_category(&categories, &category)?.id);
            }

            let transactions = fetch("transactions", api.list_transactions(&filter)).await?;
            print!("{}", format_transaction_list(&transactions, &categories));
        }

        TransactionCommands::Import { file, save } => {
            let records = api.import_path(&file).await?;
            print!("{}", format_import_preview(&records));

            if save && !records.is_empty() {
                let created = api.create_transactions(&records).await?;
                println!("Created {} transactions", created.len());
            }
        }
    }

    Ok(())
}
