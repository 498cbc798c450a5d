//! textgate MCP server
//!
//! Exposes text-generation tools over MCP (stdio transport), dispatched
//! across whichever backends have credentials configured.
//!
//! ## Tools
//!
//! - `generate_text` - generate from a single prompt
//! - `chat_conversation` - continue a multi-turn conversation
//! - `list_models` - enumerate configured backends and their models
//!
//! ## Configuration
//!
//! One optional credential per backend: `OPENAI_API_KEY`, `GROQ_API_KEY`,
//! `OPENROUTER_API_KEY`. A backend is available iff its credential is set.
//! Set `TEXTGATE_DEBUG=1` for debug-level logging (stderr).
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "textgate": {
//!       "command": "textgate-mcp",
//!       "env": { "OPENAI_API_KEY": "sk-..." }
//!     }
//!   }
//! }
//! ```

use std::sync::Arc;

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

use textgate_core::{
    BackendRegistry, Dispatcher, EnvSecretStore, SharedLogger, StderrLogger,
};

mod server;

use server::TextGateServer;

#[tokio::main]
async fn main() -> Result<()> {
    // All diagnostics go to stderr; stdout is the MCP protocol stream.
    let base = StderrLogger::new();
    let logger: SharedLogger = if std::env::var("TEXTGATE_DEBUG").is_ok() {
        Arc::new(base.verbose())
    } else {
        Arc::new(base)
    };

    logger.info(&format!("starting textgate-mcp {}", env!("CARGO_PKG_VERSION")));

    let registry = BackendRegistry::from_secret_store(&EnvSecretStore::new(), &logger);
    let configured: Vec<&str> = registry.available().iter().map(|id| id.as_str()).collect();
    logger.info(&format!(
        "{} backend(s) configured: [{}]",
        configured.len(),
        configured.join(", ")
    ));

    let dispatcher = Dispatcher::new(Arc::new(registry), Arc::clone(&logger));
    let service = TextGateServer::new(dispatcher);

    // Failing to establish the transport is the one fatal condition.
    let server = service.serve(stdio()).await?;

    tokio::select! {
        result = server.waiting() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            logger.info("shutdown signal received; closing transport");
        }
    }

    logger.info("textgate-mcp stopped");
    Ok(())
}
