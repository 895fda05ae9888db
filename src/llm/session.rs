use crate::llm::LlmServiceError;
use async_trait::async_trait;

/// A conversation with a remote model: send one prompt, receive the reply text.
///
/// Implementations own whatever conversation history they keep. A caller that
/// hands an existing session to [`crate::analysis::ContentAnalyzer`] keeps
/// responsibility for how that session was configured.
#[async_trait]
pub trait Session: Send {
    /// Send a prompt and wait for the complete text reply
    async fn send(&mut self, prompt: &str) -> Result<String, LlmServiceError>;

    /// Short name used in log lines
    fn name(&self) -> &str {
        "session"
    }
}

