use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::Path;

/// Everything that went into and came out of one model call
#[derive(Debug, Clone)]
pub struct DebugRecord {
    pub timestamp: DateTime<Local>,
    /// Character count of the concatenated markdown before truncation
    pub input_content_length: usize,
    pub system_prompt: String,
    pub processing_prompt: String,
    pub full_prompt: String,
    pub response: String,
}

impl DebugRecord {
    /// Write the record as `key: value` lines, replacing any existing file
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for DebugRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "timestamp: {}", self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"))?;
        writeln!(f, "input_content_length: {}", self.input_content_length)?;
        writeln!(f, "system_prompt: {}", self.system_prompt)?;
        writeln!(f, "processing_prompt: {}", self.processing_prompt)?;
        writeln!(f, "full_prompt: {}", self.full_prompt)?;
        writeln!(f, "response: {}", self.response)
    }
}
