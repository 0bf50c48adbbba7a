//! Command trait, registry, and line handling.

use std::collections::BTreeMap;
use std::fmt;

use webshell_types::error::Result;
use webshell_vfs::VirtualNode;

use crate::session::ShellSession;

/// A single executable command.
pub trait Command {
    /// The command name (what the user types, and its entry under `/bin`).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Execute the command.
    ///
    /// `args[0]` is the command as typed (a name or a path); parameters
    /// follow. The returned text is raw: the session adds the trailing
    /// newline.
    fn execute(&self, args: &[&str], session: &mut ShellSession) -> Result<String>;
}

/// Copyable handle to a registered command.
///
/// This is the payload of executable nodes in the session's tree.
#[derive(Clone, Copy)]
pub struct Program(&'static dyn Command);

impl Program {
    pub fn new(cmd: &'static dyn Command) -> Self {
        Self(cmd)
    }

    pub fn name(&self) -> &'static str {
        let cmd: &'static dyn Command = self.0;
        cmd.name()
    }

    pub fn description(&self) -> &'static str {
        let cmd: &'static dyn Command = self.0;
        cmd.description()
    }

    pub fn run(self, args: &[&str], session: &mut ShellSession) -> Result<String> {
        self.0.execute(args, session)
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Program").field(&self.name()).finish()
    }
}

/// Tree node type used by sessions.
pub type Node = VirtualNode<Program>;

/// Registry of available commands, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Program>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: &'static dyn Command) {
        self.commands
            .insert(cmd.name().to_string(), Program::new(cmd));
    }

    /// Look a command up by exact name. Never consults the filesystem.
    pub fn get(&self, name: &str) -> Option<Program> {
        self.commands.get(name).copied()
    }

    /// Registered commands sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Program)> {
        self.commands.iter().map(|(name, p)| (name.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Split a line on single spaces, dropping empty tokens.
///
/// Only the space character separates; tabs and other whitespace stay part
/// of the token.
pub(crate) fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').filter(|t| !t.is_empty()).collect()
}

/// Terminate non-empty output with exactly one newline.
pub(crate) fn format_output(mut out: String) -> String {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
