use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use planner::cli::{
    handle_category_command, handle_draft_command, handle_group_command, handle_plan_command,
    handle_transaction_command, handle_wallet_command, CliContext,
};
use planner::config::{PlannerPaths, Settings};

/// Environment variable holding the log filter (e.g. "planner=debug")
const LOG_ENV: &str = "PLANNER_LOG";

#[derive(Parser)]
#[command(
    name = "planner",
    version,
    about = "Annual budget planner",
    long_about = "Plan a year of income and expenses month by month. Sections \
                  mirror the backend's budget groups; the balance is income \
                  minus every other section. Edits are kept in a local draft \
                  until they are committed as transactions."
)]
struct Cli {
    /// Plan year (defaults to the current year)
    #[arg(short, long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan grid, balance and cell edits
    #[command(subcommand)]
    Plan(planner::cli::PlanCommands),

    /// Local draft management
    #[command(subcommand)]
    Draft(planner::cli::DraftCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(planner::cli::CategoryCommands),

    /// Wallet management commands
    #[command(subcommand)]
    Wallet(planner::cli::WalletCommands),

    /// Budget group management commands
    #[command(subcommand)]
    Group(planner::cli::GroupCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(planner::cli::TransactionCommands),

    /// Show current configuration and paths, optionally updating settings
    Config {
        /// Backend base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Bearer token sent to the backend
        #[arg(long)]
        api_token: Option<String>,
        /// Namespace for local draft keys
        #[arg(long)]
        namespace: Option<String>,
        /// Wallet used by `plan commit` when none is given
        #[arg(long)]
        wallet: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());

    if let Some(Commands::Config {
        api_url,
        api_token,
        namespace,
        wallet,
    }) = &cli.command
    {
        let changed = api_url.is_some()
            || api_token.is_some()
            || namespace.is_some()
            || wallet.is_some();
        if let Some(url) = api_url {
            settings.api_base_url = url.clone();
        }
        if let Some(token) = api_token {
            settings.api_token = Some(token.clone());
        }
        if let Some(namespace) = namespace {
            settings.draft_namespace = namespace.clone();
        }
        if let Some(wallet) = wallet {
            settings.default_wallet = Some(wallet.clone());
        }
        if changed {
            settings.save(&paths)?;
            println!("Settings saved.");
            println!();
        }
    }

    let ctx = CliContext::new(paths, settings, year);

    match cli.command {
        Some(Commands::Plan(cmd)) => handle_plan_command(&ctx, cmd).await?,
        Some(Commands::Draft(cmd)) => handle_draft_command(&ctx, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&ctx, cmd).await?,
        Some(Commands::Wallet(cmd)) => handle_wallet_command(&ctx, cmd).await?,
        Some(Commands::Group(cmd)) => handle_group_command(&ctx, cmd).await?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&ctx, cmd).await?,
        Some(Commands::Config { .. }) => {
            let settings = &ctx.settings;
            println!("Planner Configuration");
            println!("=====================");
            println!("Config file:      {}", ctx.paths.settings_file().display());
            println!("Drafts directory: {}", ctx.paths.drafts_dir().display());
            println!();
            println!("Settings:");
            println!("  API base URL:    {}", settings.api_base_url);
            println!(
                "  API token:       {}",
                if settings.api_token.is_some() { "set" } else { "not set" }
            );
            println!("  Draft namespace: {}", settings.draft_namespace);
            println!("  Currency:        {}", settings.currency_symbol);
            println!(
                "  Default wallet:  {}",
                settings.default_wallet.as_deref().unwrap_or("-")
            );
        }
        None => {
            println!("Planner - annual budget planning");
            println!();
            println!("Run 'planner --help' for usage information.");
            println!("Run 'planner plan show' to see this year's plan.");
        }
    }

    Ok(())
}
