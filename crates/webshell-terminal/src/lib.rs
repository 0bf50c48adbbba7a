//! Command interpreter and shell session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name; the same handles are mounted
//! as executables under `/bin`, so a command can be invoked either by bare
//! name or by any path that reaches it. `ShellSession::command` is the single
//! entry point: it tokenizes a line, picks the program, runs it, and turns
//! the result (or failure) into display text.

mod commands;
mod history;
mod interpreter;
mod session;

/// Register the stock built-ins (cat, cd, date, echo, help, ls, pwd, whoami).
pub use commands::register_builtins;
/// Up/down recall state over a session's history.
pub use history::{HistoryCursor, Recall};
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// Tree node type used by sessions.
pub use interpreter::Node;
/// Copyable handle to a registered command.
pub use interpreter::Program;
/// Mutable shell state plus the `command` entry point.
pub use session::ShellSession;
