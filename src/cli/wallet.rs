//! Wallet CLI commands

use clap::Subcommand;

use super::{fetch, parse_amount, CliContext};
use crate::display::wallet::format_wallet_list;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{WalletInput, WalletType};
use crate::services::find_wallet;

/// Wallet subcommands
#[derive(Subcommand)]
pub enum WalletCommands {
    /// List all wallets with balances
    List,

    /// Create a new wallet
    Create {
        /// Wallet name
        name: String,
        /// Wallet type (checking, savings, credit, cash, investment, other)
        #[arg(short = 't', long = "type", default_value = "checking")]
        wallet_type: String,
        /// Starting balance
        #[arg(short, long, default_value = "0")]
        balance: String,
    },

    /// Delete a wallet
    Delete {
        /// Wallet name or ID
        wallet: String,
    },
}

/// Handle a wallet command
pub async fn handle_wallet_command(ctx: &CliContext, cmd: WalletCommands) -> PlannerResult<()> {
    let api = ctx.api()?;

    match cmd {
        WalletCommands::List => {
            let wallets = fetch("wallets", api.list_wallets()).await?;
            print!(
                "{}",
                format_wallet_list(&wallets, &ctx.settings.currency_symbol)
            );
        }

        WalletCommands::Create {
            name,
            wallet_type,
            balance,
        } => {
            let wallet_type = WalletType::parse(&wallet_type).ok_or_else(|| {
                PlannerError::Validation(format!("Unknown wallet type: {}", wallet_type))
            })?;
            let input = WalletInput {
                name,
                balance: parse_amount(&balance)?,
                wallet_type,
                bank_id: None,
            };

            let wallet = api.create_wallet(&input).await?;
            println!("Created wallet: {}", wallet);
            println!("  ID: {}", wallet.id);
        }

        WalletCommands::Delete { wallet } => {
            let wallets = api.list_wallets().await?;
            let found = find_wallet(&wallets, &wallet).ok_or_else(|| PlannerError::NotFound {
                entity_type: "Wallet",
                identifier: wallet.clone(),
            })?;
            api.delete_wallet(found.id).await?;
            println!("Deleted wallet: {}", found.name);
        }
    }

    Ok(())
}
