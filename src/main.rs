use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use dtmoney::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List all transactions
    List,
    /// Search transactions by description
    Search {
        /// Text to look for, case-insensitive. Empty lists everything.
        #[arg(default_value = "")]
        query: String,
    },
    /// Display income, outcome and balance totals
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => dtmoney::cli::setup::setup(),
        Some(Commands::List) => {
            dtmoney::run_command(dtmoney::AppCommand::List, cli.config_path.as_deref()).await
        }
        Some(Commands::Search { query }) => {
            dtmoney::run_command(
                dtmoney::AppCommand::Search { query },
                cli.config_path.as_deref(),
            )
            .await
        }
        Some(Commands::Summary) => {
            dtmoney::run_command(dtmoney::AppCommand::Summary, cli.config_path.as_deref()).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
