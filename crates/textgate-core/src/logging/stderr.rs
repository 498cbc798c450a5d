//! Stderr logger implementation

use super::traits::Logger;

/// A logger that writes every level to stderr
///
/// Stdout carries the MCP protocol stream, so all diagnostics must go to
/// stderr, including info-level messages.
#[derive(Debug, Clone)]
pub struct StderrLogger {
    prefix: String,
    verbose: bool,
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl StderrLogger {
    /// Create a new stderr logger with the default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[textgate]".to_string(),
            verbose: false,
        }
    }

    /// Create a stderr logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            verbose: false,
        }
    }

    /// Enable debug-level output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl Logger for StderrLogger {
    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{} DEBUG: {}", self.prefix, message);
        }
    }

    fn info(&self, message: &str) {
        eprintln!("{} INFO: {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN: {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR: {}", self.prefix, message);
    }
}
