//! Error types for termfolio.
//!
//! The shell's command path never fails: unknown commands and missing files
//! are rendered as text. These errors cover the fallible edges around it,
//! such as configuration loading and adapter I/O.

use std::io;

/// Errors produced outside the shell's command path.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
