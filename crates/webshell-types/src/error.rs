//! Error types for webshell.

use std::io;

/// Errors produced by the shell.
///
/// The first group is the user-facing taxonomy: their `Display` text is
/// exactly what the terminal prints. Everything else is an internal
/// failure and is never shown verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("No such file or directory")]
    NotFound,

    #[error("{0} is a directory")]
    IsADirectory(String),

    #[error("{0} is a binary file")]
    IsABinary(String),

    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("{0} is not executable")]
    NotExecutable(String),

    #[error("Command not found")]
    CommandNotFound,

    #[error("config error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ShellError {
    /// Whether this failure belongs to the user-facing taxonomy.
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::IsADirectory(_)
                | Self::IsABinary(_)
                | Self::NotADirectory(_)
                | Self::NotExecutable(_)
                | Self::CommandNotFound
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;
