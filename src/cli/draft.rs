//! Draft CLI commands

use clap::Subcommand;

use super::CliContext;
use crate::display::plan::format_pending_list;
use crate::error::PlannerResult;
use crate::planning::PlanStore;

/// Draft subcommands
#[derive(Subcommand)]
pub enum DraftCommands {
    /// Show which years have a local draft
    Show,

    /// Discard the local draft for the selected year
    Clear,
}

/// Handle a draft command
pub fn handle_draft_command(ctx: &CliContext, cmd: DraftCommands) -> PlannerResult<()> {
    let drafts = ctx.drafts();

    match cmd {
        DraftCommands::Show => {
            let years = drafts.years()?;
            if years.is_empty() {
                println!("No drafts found.");
                return Ok(());
            }

            println!("Drafts ({}):", drafts.namespace());
            for year in years {
                match drafts.load(year) {
                    Some(draft) => {
                        let updated = draft.updated_at.format("%Y-%m-%d %H:%M UTC").to_string();
                        let pending = draft.pending_entries.len();
                        println!(
                            "  {}  updated {}  {} pending",
                            drafts.key(year),
                            updated,
                            pending
                        );
                        if year == ctx.year && pending > 0 {
                            let store = PlanStore::from_draft(draft);
                            println!();
                            println!("{}", format_pending_list(&store));
                        }
                    }
                    None => println!("  {}  (unreadable, ignored)", drafts.key(year)),
                }
            }
        }

        DraftCommands::Clear => {
            if drafts.clear(ctx.year)? {
                println!("Cleared draft {}", drafts.key(ctx.year));
            } else {
                println!("No draft for {}", ctx.year);
            }
        }
    }

    Ok(())
}
