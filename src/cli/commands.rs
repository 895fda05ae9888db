use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mdsplit",
    about = "Turn a directory of markdown notes into CSV and JSON with a Gemini model",
    version,
    author
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the markdown files of a directory into CSV and JSON
    Analyze {
        /// Directory holding the .md files; outputs are written here too
        #[arg(value_name = "DIRECTORY")]
        directory: PathBuf,

        /// How to print the processing result
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Log request and response sizes of the Gemini call
        #[arg(long)]
        llmdbg: bool,

        /// Give up on the Gemini call after this many seconds (default: wait indefinitely)
        #[arg(long, value_name = "SECS")]
        llm_timeout: Option<u64>,
    },

    /// Display current mdsplit configuration
    Config,

    /// Show information about mdsplit
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "mdsplit",
            "-v",
            "analyze",
            "notes",
            "--format",
            "json",
            "--llm-timeout",
            "30",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Text);
        match cli.command {
            Commands::Analyze {
                directory,
                format,
                llmdbg,
                llm_timeout,
            } => {
                assert_eq!(directory, PathBuf::from("notes"));
                assert_eq!(format, OutputFormat::Json);
                assert!(!llmdbg);
                assert_eq!(llm_timeout, Some(30));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["mdsplit", "analyze", "notes", "--log-format", "json"]).unwrap();

        assert_eq!(cli.log_format, LogFormat::Json);
        match cli.command {
            Commands::Analyze { format, llm_timeout, .. } => {
                assert_eq!(format, OutputFormat::Terminal);
                assert_eq!(llm_timeout, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_analyze_requires_directory() {
        assert!(Cli::try_parse_from(["mdsplit", "analyze"]).is_err());
    }
}
