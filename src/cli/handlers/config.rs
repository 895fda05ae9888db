use crate::llm::LlmConfig;
use anyhow::Result;
use std::env;

pub fn handle_config_command() -> Result<()> {
    let env_file_loaded = dotenv::dotenv().is_ok();

    println!("🔧 mdsplit Configuration");
    println!("═══════════════════════════════════════");
    println!();

    println!("📦 Version Information:");
    println!("  • mdsplit: v{}", env!("CARGO_PKG_VERSION"));
    println!("  • License: {}", env!("CARGO_PKG_LICENSE"));
    println!();

    println!("🌍 Environment Configuration:");
    if env_file_loaded {
        println!("  • .env file: ✅ Loaded");
    } else {
        println!("  • .env file: ⚠️  Not found (using system environment)");
    }

    for key in ["GEMINI_API_KEY", "GOOGLE_API_KEY"] {
        match env::var(key) {
            Ok(_) => println!("  • {}: ✅ Set (hidden)", key),
            Err(_) => println!("  • {}: ❌ Not set", key),
        }
    }

    for key in [
        "GEMINI_MODEL",
        "GEMINI_API_BASE",
        "LLM_REQUEST_TIMEOUT",
        "LLM_MAX_TOKENS",
        "LLM_TEMPERATURE",
        "LLM_TOP_P",
        "LLM_TOP_K",
        "LLM_DEBUG",
        "RUST_LOG",
    ] {
        match env::var(key) {
            Ok(val) => println!("  • {}: {}", key, val),
            Err(_) => println!("  • {}: (default)", key),
        }
    }
    println!();

    // Effective settings, whether or not an API key is present
    let config = LlmConfig::effective_from_env();
    println!("🤖 Generation Settings:");
    println!("  • Model: {}", config.model);
    if let Some(api_base) = &config.api_base {
        println!("  • API base: {}", api_base);
    }
    println!("  • Temperature: {}", config.temperature);
    println!("  • top_p: {}", config.top_p);
    println!("  • top_k: {}", config.top_k);
    println!("  • Max output tokens: {}", config.max_output_tokens);
    println!("  • Response format: {}", config.response_mime_type);
    match config.timeout_secs {
        Some(secs) => println!("  • Request timeout: {} seconds", secs),
        None => println!("  • Request timeout: none"),
    }
    println!();

    println!("📁 Output Files (written into the analyzed directory):");
    println!("  • processed_content.csv");
    println!("  • processed_content.json");
    println!("  • processing_debug.txt");
    println!();

    println!("💡 Tips:");
    if config.api_key.is_empty() {
        println!("  • Set GEMINI_API_KEY to enable analysis");
    }
    println!("  • Use RUST_LOG=debug or --verbose for detailed logging");

    Ok(())
}
