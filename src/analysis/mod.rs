pub mod analyzer;
pub mod debug;
pub mod extract;
pub mod result;

pub use analyzer::{AnalysisError, ContentAnalyzer};
pub use debug::DebugRecord;
pub use result::{ProcessedFiles, ProcessingResult};
