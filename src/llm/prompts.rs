/// Predefined prompts for the markdown-to-CSV/JSON conversion
pub const SYSTEM_PROMPT: &str = "You are a high-precision content processing system. \
Process the provided content into both CSV and JSON formats:

        1. CSV Format Requirements:
           - Identify key data points for table format
           - Define intuitive column headers
           - Use commas as delimiters; enclose fields with commas in double quotes
           - Maintain consistent data types across rows

        2. JSON Format Requirements:
           - Structure data hierarchically
           - Include metadata and relationships
           - Ensure proper nesting of related information
           - Maintain data type consistency

        Processing Guidelines:
        - Extract all relevant data points
        - Preserve relationships and context
        - Ensure machine-readable output
        - Include timestamps and metadata where applicable";

pub const PROCESSING_INSTRUCTION: &str =
    "Process the following content into both CSV and JSON formats. Provide both formats separately:";

/// Largest number of characters of source content embedded in a prompt
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// First `MAX_CONTENT_CHARS` characters of `content`
pub fn truncate_content(content: &str) -> &str {
    match content.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((byte_index, _)) => &content[..byte_index],
        None => content,
    }
}

/// Per-invocation prompt embedding the (already truncated) content
pub fn build_processing_prompt(content: &str) -> String {
    format!("{}\n\n{}", PROCESSING_INSTRUCTION, content)
}

/// System prompt followed by the processing prompt
pub fn build_full_prompt(system_prompt: &str, processing_prompt: &str) -> String {
    format!("{}\n\n{}", system_prompt, processing_prompt)
}
