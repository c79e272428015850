//! Plan CLI commands
//!
//! Every edit is written back to the local draft right away; nothing reaches
//! the backend until `plan commit`.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use super::{parse_amount, parse_month, CliContext};
use crate::display::plan::{format_balance, format_pending_list, format_plan_grid};
use crate::error::{PlannerError, PlannerResult};
use crate::export::{export_plan_csv, export_plan_json};
use crate::models::EntryId;
use crate::services::{find_wallet, PlanService};

/// Output format for `plan export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the plan grid with totals and balance
    Show,

    /// Show the balance month by month
    Balance,

    /// Add an amount to a cell (recorded as pending)
    Add {
        /// Section title or ID
        section: String,
        /// Row label or ID
        row: String,
        /// Month (JAN..DEZ, jan..dec or 1-12)
        month: String,
        /// Amount to add (e.g., "150" or "150,90")
        amount: String,
        /// Description used when the entry is committed
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Undo a pending entry (the most recent one by default)
    Undo {
        /// Pending entry ID
        entry: Option<String>,
    },

    /// Add an empty row to a section
    #[command(name = "add-row")]
    AddRow {
        /// Section title or ID
        section: String,
        /// Row label
        label: String,
    },

    /// Overwrite a cell value (not recorded as pending)
    Set {
        /// Section title or ID
        section: String,
        /// Row label or ID
        row: String,
        /// Month (JAN..DEZ, jan..dec or 1-12)
        month: String,
        /// New value
        value: String,
    },

    /// List entries added since the last commit
    Pending,

    /// Export the plan
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rebuild sections and rows from the backend's budget groups
    Sync,

    /// Send pending entries to the backend as transactions
    Commit {
        /// Wallet name or ID (defaults to the configured wallet)
        #[arg(short, long)]
        wallet: Option<String>,
    },
}

/// Handle a plan command
pub async fn handle_plan_command(ctx: &CliContext, cmd: PlanCommands) -> PlannerResult<()> {
    let drafts = ctx.drafts();
    let service = PlanService::new(&drafts);
    let year = ctx.year;
    let mut store = service.open_local(year);

    match cmd {
        PlanCommands::Show => {
            print!("{}", format_plan_grid(&store, year));
        }

        PlanCommands::Balance => {
            print!("{}", format_balance(&store, &ctx.settings.currency_symbol));
        }

        PlanCommands::Add {
            section,
            row,
            month,
            amount,
            description,
        } => {
            let (section_id, row_id) = store.find_cell(&section, &row)?;
            let month = parse_month(&month)?;
            let amount = parse_amount(&amount)?;

            let entry_id = store
                .add(section_id, row_id, month, amount)?
                .ok_or_else(|| PlannerError::row_not_found(&row))?;
            if let Some(description) = description {
                store.describe_pending(entry_id, description)?;
            }
            service.save_draft(&store, year)?;

            println!("Added {} to {} / {} ({})", amount, section, row, month.label());
            println!("  Entry: {}", entry_id);
        }

        PlanCommands::Undo { entry } => {
            let undone = match entry {
                Some(id) => {
                    let id = find_entry(&store, &id)?;
                    store.undo(id)?
                }
                None => store
                    .undo_last()
                    .ok_or_else(|| PlannerError::Validation("Nothing to undo".into()))?,
            };
            service.save_draft(&store, year)?;

            println!("Undid {} in {}", undone.amount, undone.month.label());
        }

        PlanCommands::AddRow { section, label } => {
            let section_id = store
                .find_section(&section)
                .map(|s| s.id)
                .ok_or_else(|| PlannerError::section_not_found(&section))?;
            let row_id = store.add_row(section_id, &label)?;
            service.save_draft(&store, year)?;

            println!("Added row '{}' to {}", label.trim(), section);
            println!("  ID: {}", row_id);
        }

        PlanCommands::Set {
            section,
            row,
            month,
            value,
        } => {
            let (section_id, row_id) = store.find_cell(&section, &row)?;
            let month = parse_month(&month)?;
            let value = parse_amount(&value)?;

            store.set_cell(section_id, row_id, month, value)?;
            service.save_draft(&store, year)?;

            println!("Set {} / {} ({}) to {}", section, row, month.label(), value);
        }

        PlanCommands::Pending => {
            println!("{}", format_pending_list(&store));
        }

        PlanCommands::Export { format, output } => {
            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        PlannerError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    write_export(&store, year, format, BufWriter::new(file))?;
                    println!("Exported plan {} to {}", year, path.display());
                }
                None => write_export(&store, year, format, io::stdout().lock())?,
            }
        }

        PlanCommands::Sync => {
            let api = ctx.api()?;
            if service.sync_layout(&api, &mut store).await? {
                service.save_draft(&store, year)?;
                println!(
                    "Synced {} sections from the backend",
                    store.sections().len()
                );
            } else {
                println!("Backend has no budget groups; local layout kept.");
            }
        }

        PlanCommands::Commit { wallet } => {
            if store.pending().is_empty() {
                println!("No pending entries.");
                return Ok(());
            }

            let api = ctx.api()?;
            let wallet_id = match wallet.or_else(|| ctx.settings.default_wallet.clone()) {
                Some(identifier) => {
                    let wallets = api.list_wallets().await?;
                    let found = find_wallet(&wallets, &identifier).ok_or_else(|| {
                        PlannerError::NotFound {
                            entity_type: "Wallet",
                            identifier: identifier.clone(),
                        }
                    })?;
                    Some(found.id)
                }
                None => None,
            };

            let created = service
                .commit_pending(&api, &mut store, year, wallet_id)
                .await?;
            println!("Committed {} transactions", created.len());
        }
    }

    Ok(())
}

fn write_export<W: io::Write>(
    store: &crate::planning::PlanStore,
    year: i32,
    format: ExportFormat,
    writer: W,
) -> PlannerResult<()> {
    match format {
        ExportFormat::Csv => export_plan_csv(store, writer),
        ExportFormat::Json => export_plan_json(store, year, writer),
    }
}

fn find_entry(store: &crate::planning::PlanStore, identifier: &str) -> PlannerResult<EntryId> {
    store
        .pending()
        .iter()
        .find(|e| e.id.matches(identifier))
        .map(|e| e.id)
        .ok_or_else(|| PlannerError::entry_not_found(identifier))
}
