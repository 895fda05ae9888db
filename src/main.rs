use anyhow::Result;
use clap::Parser;
use mdsplit::cli::commands::{Cli, Commands};
use mdsplit::cli::handlers::{handle_analyze_command, handle_config_command};
use mdsplit::cli::utils::{init_logging, print_info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.log_format)?;

    // Execute command
    match cli.command {
        Commands::Analyze {
            directory,
            format,
            llmdbg,
            llm_timeout,
        } => {
            // The result, failure included, is already printed; only the exit status is left
            if !handle_analyze_command(directory, format, llmdbg, llm_timeout).await? {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Config => handle_config_command(),

        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}
