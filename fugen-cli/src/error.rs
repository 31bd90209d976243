//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Dictionary file missing or unreadable
    DictionaryNotFound(String),
    /// No dictionary given on the command line or in the config file
    MissingDictionary,
    /// Configuration error
    ConfigError(String),
    /// Input file not found or inaccessible
    InputNotFound(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::DictionaryNotFound(path) => write!(f, "Dictionary not found: {path}"),
            CliError::MissingDictionary => {
                write!(f, "No dictionary given, use --dictionary or a config file")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InputNotFound(path) => write!(f, "Input file not found: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
