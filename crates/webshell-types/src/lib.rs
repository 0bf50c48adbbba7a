//! Foundation types for webshell.
//!
//! Shared by every webshell crate: the error taxonomy that the interpreter
//! turns into user-visible text, and the configuration a session is built
//! from.

pub mod config;
pub mod error;
