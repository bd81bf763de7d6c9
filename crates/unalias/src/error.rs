//! Error types for unalias
//!
//! Alias resolution and specifier rewriting never fail. Errors only come from
//! loading configuration and from the emit driver's parsing step.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use unalias_config::ConfigError;

/// Errors surfaced to the host
#[derive(Error, Debug, Diagnostic)]
pub enum UnaliasError {
    /// Source text could not be parsed
    #[error("Failed to parse {}: {}", path.display(), messages.join(", "))]
    #[diagnostic(code(unalias::parse_failed))]
    Parse {
        path: PathBuf,
        messages: Vec<String>,
    },

    /// Path alias configuration could not be loaded
    #[error("Invalid path alias configuration: {0}")]
    #[diagnostic(
        code(unalias::config),
        help("check compilerOptions.baseUrl and compilerOptions.paths")
    )]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(unalias::io))]
    Io(#[from] std::io::Error),
}

impl UnaliasError {
    /// Create a Parse error
    pub fn parse(path: impl Into<PathBuf>, messages: Vec<String>) -> Self {
        Self::Parse {
            path: path.into(),
            messages,
        }
    }
}

/// Result type for unalias operations
pub type Result<T> = std::result::Result<T, UnaliasError>;
