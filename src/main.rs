use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crossover::commands::{cmd_browse, cmd_episodes, cmd_ls};

#[derive(Parser)]
#[command(name = "crossover")]
#[command(about = "Browse the character catalog and compare shared episodes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive character browser
    #[command(visible_alias = "b")]
    Browse,

    /// List one page of the character catalog
    Ls {
        /// Page number (defaults to the first page)
        #[arg(short, long)]
        page: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the episodes with the given ids
    Episodes {
        /// Episode ids
        #[arg(required = true)]
        ids: Vec<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // No subcommand opens the browser
    let result = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => cmd_browse().await,
        Commands::Ls { page, json } => cmd_ls(page, json).await,
        Commands::Episodes { ids, json } => cmd_episodes(&ids, json).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
