use super::debug::DebugRecord;
use super::extract::{extract_csv, extract_json};
use super::result::{ProcessedFiles, ProcessingResult};
use crate::llm::prompts::{self, SYSTEM_PROMPT};
use crate::llm::{GeminiSession, LlmConfig, LlmServiceError, Session};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Faults inside one analysis run. Flattened into [`ProcessingResult::Failure`]
/// before leaving the analyzer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Llm(#[from] LlmServiceError),
}

impl AnalysisError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Markdown gathered from one directory
#[derive(Debug, Default)]
struct MarkdownContent {
    text: String,
    file_count: usize,
}

/// Turns a directory of markdown into CSV and JSON through a model session
pub struct ContentAnalyzer {
    session: Box<dyn Session>,
    system_prompt: String,
}

impl ContentAnalyzer {
    /// Create an analyzer from an API key, or around a session the caller already holds.
    ///
    /// A supplied session is used as-is and the key goes unused.
    pub fn new(
        api_key: impl Into<String>,
        existing_session: Option<Box<dyn Session>>,
    ) -> Result<Self, LlmServiceError> {
        Self::with_config(LlmConfig::with_api_key(api_key), existing_session)
    }

    /// Like [`ContentAnalyzer::new`] but with full control over generation settings
    pub fn with_config(
        config: LlmConfig,
        existing_session: Option<Box<dyn Session>>,
    ) -> Result<Self, LlmServiceError> {
        let session = match existing_session {
            Some(session) => {
                debug!("Reusing caller-supplied session '{}'", session.name());
                session
            }
            None => {
                let session = GeminiSession::new(config)?;
                debug!("Started new Gemini session with model {}", session.config().model);
                Box::new(session) as Box<dyn Session>
            }
        };

        Ok(Self {
            session,
            system_prompt: SYSTEM_PROMPT.to_string(),
        })
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Read the `.md` files in `directory`, ask the model for CSV and JSON, and
    /// write `processed_content.csv`, `processed_content.json` and
    /// `processing_debug.txt` next to them.
    ///
    /// Never fails outright: any fault comes back as [`ProcessingResult::Failure`].
    /// Files written before the fault are left in place.
    pub async fn analyze(&mut self, directory: impl AsRef<Path>) -> ProcessingResult {
        let directory = directory.as_ref();
        info!("Analyzing markdown in {}", directory.display());

        match self.run(directory).await {
            Ok(files) => {
                info!("✓ CSV written to {}", files.csv_file.display());
                info!("✓ JSON written to {}", files.json_file.display());
                info!("✓ Debug record written to {}", files.debug_file.display());
                ProcessingResult::Success(files)
            }
            Err(e) => {
                error!("Processing failed: {}", e);
                ProcessingResult::failure(e)
            }
        }
    }

    async fn run(&mut self, directory: &Path) -> Result<ProcessedFiles, AnalysisError> {
        let content = read_markdown(directory)?;
        let input_content_length = content.text.chars().count();
        info!(
            "Read {} markdown file(s), {} characters",
            content.file_count, input_content_length
        );

        let truncated = prompts::truncate_content(&content.text);
        if truncated.len() < content.text.len() {
            warn!(
                "Content truncated from {} to {} characters",
                input_content_length,
                prompts::MAX_CONTENT_CHARS
            );
        }

        let processing_prompt = prompts::build_processing_prompt(truncated);
        let full_prompt = prompts::build_full_prompt(&self.system_prompt, &processing_prompt);
        debug!(
            "Sending prompt to {}: {} characters",
            self.session.name(),
            full_prompt.chars().count()
        );

        let response = self.session.send(&full_prompt).await?;
        debug!("Received reply: {} characters", response.chars().count());

        let files = ProcessedFiles::in_directory(directory);

        let record = DebugRecord {
            timestamp: Local::now(),
            input_content_length,
            system_prompt: self.system_prompt.clone(),
            processing_prompt,
            full_prompt,
            response,
        };
        record
            .write_to(&files.debug_file)
            .map_err(|e| AnalysisError::io(&files.debug_file, e))?;

        let csv = extract_csv(&record.response);
        if csv.is_empty() {
            warn!("Reply contained no CSV section");
        }
        fs::write(&files.csv_file, csv).map_err(|e| AnalysisError::io(&files.csv_file, e))?;

        let json = extract_json(&record.response);
        if json.is_empty() {
            warn!("Reply contained no JSON section");
        }
        fs::write(&files.json_file, json).map_err(|e| AnalysisError::io(&files.json_file, e))?;

        Ok(files)
    }
}

/// Concatenate every `*.md` entry of `directory` in listing order, each followed by a blank line
fn read_markdown(directory: &Path) -> Result<MarkdownContent, AnalysisError> {
    let mut content = MarkdownContent::default();

    let entries = fs::read_dir(directory).map_err(|e| AnalysisError::io(directory, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AnalysisError::io(directory, e))?;
        if !entry.file_name().to_string_lossy().ends_with(".md") {
            continue;
        }

        let path = entry.path();
        let text = fs::read_to_string(&path).map_err(|e| AnalysisError::io(&path, e))?;
        debug!("  ✓ Loaded: {} ({} bytes)", path.display(), text.len());

        content.text.push_str(&text);
        content.text.push_str("\n\n");
        content.file_count += 1;
    }

    Ok(content)
}
