pub mod config;
pub mod prompts;
pub mod service;
pub mod session;

pub use config::LlmConfig;
pub use service::{GeminiSession, LlmServiceError};
pub use session::Session;
