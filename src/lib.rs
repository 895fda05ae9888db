//! Turn a directory of markdown notes into CSV and JSON files with a Gemini model.
//!
//! ```no_run
//! use mdsplit::ContentAnalyzer;
//!
//! # async fn run() -> Result<(), mdsplit::llm::LlmServiceError> {
//! let mut analyzer = ContentAnalyzer::new("my-api-key", None)?;
//! let result = analyzer.analyze("notes/").await;
//! println!("{}", serde_json::to_string(&result).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod llm;

pub use analysis::{ContentAnalyzer, ProcessingResult};
