use crate::analysis::ContentAnalyzer;
use crate::cli::commands::OutputFormat;
use crate::cli::utils::format_result;
use crate::llm::LlmConfig;
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::info;

pub async fn handle_analyze_command(
    directory: PathBuf,
    format: OutputFormat,
    llmdbg: bool,
    llm_timeout: Option<u64>,
) -> Result<bool> {
    info!("Starting analysis of {}", directory.display());

    let mut config = LlmConfig::from_env().map_err(|e| anyhow!(e))?;
    if llmdbg {
        config.debug = true;
    }
    if let Some(secs) = llm_timeout {
        info!("  Using custom timeout: {} seconds", secs);
        config.timeout_secs = Some(secs);
    }

    info!("🤖 Using model {}", config.model);
    let mut analyzer = ContentAnalyzer::with_config(config, None)?;
    let result = analyzer.analyze(&directory).await;

    println!("{}", format_result(&result, format)?);

    Ok(result.is_success())
}
