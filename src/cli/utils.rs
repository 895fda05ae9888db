use crate::analysis::ProcessingResult;
use crate::cli::commands::{LogFormat, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber. Logs go to stderr so JSON results on stdout stay clean.
pub fn init_logging(verbose: bool, log_format: LogFormat) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = match log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Text => fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

pub fn print_info() {
    println!("mdsplit v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("Authors: {}", env!("CARGO_PKG_AUTHORS"));
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
}

/// Human-readable rendering of a processing result
pub fn render_result(result: &ProcessingResult) -> String {
    match result {
        ProcessingResult::Success(files) => format!(
            "{}\n  CSV:   {}\n  JSON:  {}\n  Debug: {}",
            "✅ Processing complete".green().bold(),
            files.csv_file.display(),
            files.json_file.display(),
            files.debug_file.display()
        ),
        ProcessingResult::Failure { error } => {
            format!("{}\n  {}", "❌ Processing failed".red().bold(), error)
        }
    }
}

/// The processing result in the requested output format
pub fn format_result(result: &ProcessingResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(render_result(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ProcessedFiles;
    use std::path::Path;

    #[test]
    fn test_render_success_lists_paths() {
        colored::control::set_override(false);
        let files = ProcessedFiles::in_directory(Path::new("notes"));
        let rendered = render_result(&ProcessingResult::Success(files.clone()));

        assert!(rendered.starts_with("✅ Processing complete"));
        assert!(rendered.contains(&files.csv_file.display().to_string()));
        assert!(rendered.contains(&files.json_file.display().to_string()));
        assert!(rendered.contains(&files.debug_file.display().to_string()));
    }

    #[test]
    fn test_render_failure_shows_message() {
        colored::control::set_override(false);
        let rendered = render_result(&ProcessingResult::failure("Request timeout"));

        assert!(rendered.starts_with("❌ Processing failed"));
        assert!(rendered.ends_with("Request timeout"));
    }

    #[test]
    fn test_format_failure_reports_error_once() {
        colored::control::set_override(false);
        let result = ProcessingResult::failure("Request timeout");

        let terminal = format_result(&result, OutputFormat::Terminal).unwrap();
        assert_eq!(terminal.matches("Request timeout").count(), 1);

        let json = format_result(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Request timeout");
    }
}
