//! Session configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the stock shell.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ShellError};

/// Default login name.
pub const DEFAULT_USER: &str = "nick";

/// Default greeting, without its trailing newline.
pub const DEFAULT_WELCOME: &str = "Welcome! Type \"help\" to see a list of commands";

/// Default contents of `~/about.txt`.
pub const DEFAULT_ABOUT: &str = "This shell was created with a bit of JavaScript\n";

/// Configuration for a single shell session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Login name; also names the home directory `/home/<user>`.
    pub user: String,
    /// Greeting shown once at startup.
    pub welcome: String,
    /// Contents of the sample file in the home directory.
    pub about: String,
    /// Maximum number of history entries kept. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            welcome: DEFAULT_WELCOME.to_string(),
            about: DEFAULT_ABOUT.to_string(),
            history_limit: None,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would produce a malformed home directory.
    pub fn validate(&self) -> Result<()> {
        if self.user.is_empty() {
            return Err(ShellError::Config("user must not be empty".to_string()));
        }
        if self.user.contains('/') {
            return Err(ShellError::Config(format!(
                "user must not contain '/': {}",
                self.user
            )));
        }
        if self.user == "." || self.user == ".." || self.user == "~" {
            return Err(ShellError::Config(format!(
                "user is not a valid directory name: {}",
                self.user
            )));
        }
        Ok(())
    }

    /// The home directory as path segments.
    pub fn home(&self) -> Vec<String> {
        vec!["home".to_string(), self.user.clone()]
    }
}
