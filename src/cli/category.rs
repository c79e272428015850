//! Category CLI commands
//!
//! Categories live on the backend; these commands are thin wrappers over
//! the API client.

use clap::Subcommand;

use super::{fetch, CliContext};
use crate::display::category::format_category_list;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, CategoryInput};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their budget group
    List,

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Color (e.g., "#22c55e")
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Find a category by name (case-insensitive) or ID
pub(crate) fn find_category<'c>(
    categories: &'c [Category],
    identifier: &str,
) -> PlannerResult<&'c Category> {
    let lower = identifier.to_lowercase();
    categories
        .iter()
        .find(|c| c.name.to_lowercase() == lower)
        .or_else(|| categories.iter().find(|c| c.id.matches(identifier)))
        .ok_or_else(|| PlannerError::NotFound {
            entity_type: "Category",
            identifier: identifier.to_string(),
        })
}

/// Handle a category command
pub async fn handle_category_command(ctx: &CliContext, cmd: CategoryCommands) -> PlannerResult<()> {
    let api = ctx.api()?;

    match cmd {
        CategoryCommands::List => {
            let (categories, groups) = fetch("categories", async {
                tokio::try_join!(api.list_categories(), api.list_budget_groups())
            })
            .await?;
            print!("{}", format_category_list(&categories, &groups));
        }

        CategoryCommands::Create {
            name,
            description,
            color,
        } => {
            let mut input = CategoryInput::new(name);
            if let Some(description) = description {
                input.description = description;
            }
            if let Some(color) = color {
                input.color = color;
            }

            let category = api.create_category(&input).await?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Delete { category } => {
            let categories = api.list_categories().await?;
            let found = find_category(&categories, &category)?;
            api.delete_category(found.id).await?;
            println!("Deleted category: {}", found.name);
        }
    }

    Ok(())
}
