//! Budget group CLI commands
//!
//! Groups become plan sections on the next `plan sync`.

use clap::Subcommand;

use super::category::find_category;
use super::{fetch, CliContext};
use crate::display::category::format_group_tree;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetGroup, BudgetGroupInput, CategoryAssignment};

/// Budget group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// List budget groups with their categories
    List,

    /// Create a new budget group
    Create {
        /// Group name
        name: String,
        /// Color (e.g., "#f97316")
        #[arg(long, default_value = "")]
        color: String,
    },

    /// Rename a budget group
    Rename {
        /// Group name or ID
        group: String,
        /// New name
        name: String,
    },

    /// Delete a budget group
    Delete {
        /// Group name or ID
        group: String,
    },

    /// Set the display order of all groups
    Reorder {
        /// Group names or IDs, in the new order
        #[arg(required = true)]
        groups: Vec<String>,
    },

    /// Assign categories to a group (or unassign them)
    Assign {
        /// Category names or IDs
        #[arg(required = true)]
        categories: Vec<String>,
        /// Target group name or ID
        #[arg(short, long, conflicts_with = "none", required_unless_present = "none")]
        to: Option<String>,
        /// Remove the categories from their group
        #[arg(long)]
        none: bool,
    },
}

fn find_group<'g>(groups: &'g [BudgetGroup], identifier: &str) -> PlannerResult<&'g BudgetGroup> {
    let lower = identifier.to_lowercase();
    groups
        .iter()
        .find(|g| g.name.to_lowercase() == lower)
        .or_else(|| groups.iter().find(|g| g.id.matches(identifier)))
        .ok_or_else(|| PlannerError::NotFound {
            entity_type: "Budget Group",
            identifier: identifier.to_string(),
        })
}

/// Handle a budget group command
pub async fn handle_group_command(ctx: &CliContext, cmd: GroupCommands) -> PlannerResult<()> {
    let api = ctx.api()?;

    match cmd {
        GroupCommands::List => {
            let (groups, categories) = fetch("budget groups", async {
                tokio::try_join!(api.list_budget_groups(), api.list_categories())
            })
            .await?;
            print!("{}", format_group_tree(&groups, &categories));
        }

        GroupCommands::Create { name, color } => {
            let group = api
                .create_budget_group(&BudgetGroupInput { name, color })
                .await?;
            println!("Created budget group: {}", group.name);
            println!("  ID: {}", group.id);
        }

        GroupCommands::Rename { group, name } => {
            let groups = api.list_budget_groups().await?;
            let found = find_group(&groups, &group)?;
            let renamed = api.rename_budget_group(found.id, &name).await?;
            println!("Renamed '{}' to '{}'", found.name, renamed.name);
        }

        GroupCommands::Delete { group } => {
            let groups = api.list_budget_groups().await?;
            let found = find_group(&groups, &group)?;
            api.delete_budget_group(found.id).await?;
            println!("Deleted budget group: {}", found.name);
        }

        GroupCommands::Reorder { groups: order } => {
            let groups = api.list_budget_groups().await?;
            let ids = order
                .iter()
                .map(|g| find_group(&groups, g).map(|found| found.id))
                .collect::<PlannerResult<Vec<_>>>()?;
            if ids.len() != groups.len() {
                return Err(PlannerError::Validation(format!(
                    "Reorder must list all {} groups, got {}",
                    groups.len(),
                    ids.len()
                )));
            }

            api.reorder_budget_groups(&ids).await?;
            println!("Reordered {} budget groups", ids.len());
        }

        GroupCommands::Assign {
            categories: names,
            to,
            none: _,
        } => {
            let (groups, categories) =
                tokio::try_join!(api.list_budget_groups(), api.list_categories())?;
            let target = to.as_deref().map(|g| find_group(&groups, g)).transpose()?;

            let assignments = names
                .iter()
                .map(|name| {
                    find_category(&categories, name).map(|c| match target {
                        Some(group) => CategoryAssignment::assign(c.id, group.id),
                        None => CategoryAssignment::unassign(c.id),
                    })
                })
                .collect::<PlannerResult<Vec<_>>>()?;

            api.update_category_assignments(&assignments).await?;
            match target {
                Some(group) => println!(
                    "Assigned {} categories to {}",
                    assignments.len(),
                    group.name
                ),
                None => println!("Unassigned {} categories", assignments.len()),
            }
        }
    }

    Ok(())
}
