use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::path::{Path, PathBuf};

/// Paths of the three files written by a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFiles {
    pub csv_file: PathBuf,
    pub json_file: PathBuf,
    pub debug_file: PathBuf,
}

impl ProcessedFiles {
    pub const CSV_FILE_NAME: &'static str = "processed_content.csv";
    pub const JSON_FILE_NAME: &'static str = "processed_content.json";
    pub const DEBUG_FILE_NAME: &'static str = "processing_debug.txt";

    /// Output locations inside `directory`
    pub fn in_directory(directory: &Path) -> Self {
        Self {
            csv_file: directory.join(Self::CSV_FILE_NAME),
            json_file: directory.join(Self::JSON_FILE_NAME),
            debug_file: directory.join(Self::DEBUG_FILE_NAME),
        }
    }
}

/// Outcome of one `analyze` call.
///
/// Every fault collapses into `Failure` with its message; callers do not get
/// to distinguish I/O problems from remote ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    Success(ProcessedFiles),
    Failure { error: String },
}

impl ProcessingResult {
    pub fn failure(error: impl ToString) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn files(&self) -> Option<&ProcessedFiles> {
        match self {
            Self::Success(files) => Some(files),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error } => Some(error),
        }
    }
}

// Serialized flat: {"success": true, "csv_file": ..} or {"success": false, "error": ..}
impl Serialize for ProcessingResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(files) => {
                let mut state = serializer.serialize_struct("ProcessingResult", 4)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("csv_file", &files.csv_file)?;
                state.serialize_field("json_file", &files.json_file)?;
                state.serialize_field("debug_file", &files.debug_file)?;
                state.end()
            }
            Self::Failure { error } => {
                let mut state = serializer.serialize_struct("ProcessingResult", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization() {
        let result = ProcessingResult::Success(ProcessedFiles::in_directory(Path::new("notes")));
        let value = serde_json::to_value(&result).unwrap();

        let expected_csv = Path::new("notes").join("processed_content.csv");
        let expected_json = Path::new("notes").join("processed_content.json");
        let expected_debug = Path::new("notes").join("processing_debug.txt");
        assert_eq!(
            value,
            json!({
                "success": true,
                "csv_file": expected_csv.to_str().unwrap(),
                "json_file": expected_json.to_str().unwrap(),
                "debug_file": expected_debug.to_str().unwrap(),
            })
        );
    }

    #[test]
    fn test_failure_serialization() {
        let result = ProcessingResult::failure("No such file or directory");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value, json!({"success": false, "error": "No such file or directory"}));
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("No such file or directory"));
        assert!(result.files().is_none());
    }
}
