//! Shell session: mutable state plus the `command` entry point.

use std::collections::VecDeque;

use webshell_types::config::ShellConfig;
use webshell_types::error::{Result, ShellError};
use webshell_vfs::path::{self, PathSegments};
use webshell_vfs::{Directory, FilesystemTree, VirtualNode};

use crate::commands::register_builtins;
use crate::interpreter::{CommandRegistry, Node, Program, format_output, tokenize};

/// One interactive shell.
///
/// Owns its filesystem tree exclusively; independent sessions share
/// nothing.
#[derive(Debug)]
pub struct ShellSession {
    cwd: PathSegments,
    home: PathSegments,
    user: String,
    welcome: String,
    /// Most recent first.
    history: VecDeque<String>,
    history_limit: Option<usize>,
    registry: CommandRegistry,
    fs: FilesystemTree<Program>,
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellSession {
    /// A session with the stock configuration and built-ins.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self::build(ShellConfig::default(), registry)
    }

    /// A session with the stock built-ins and a custom configuration.
    pub fn with_config(config: ShellConfig) -> Result<Self> {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self::with_registry(config, registry)
    }

    /// A session with a caller-supplied command set. Every registered
    /// command is also mounted under `/bin`.
    pub fn with_registry(config: ShellConfig, registry: CommandRegistry) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, registry))
    }

    fn build(config: ShellConfig, registry: CommandRegistry) -> Self {
        let fs = seed_tree(&config, &registry);
        let home = config.home();
        log::debug!(
            "New session for {} with {} commands",
            config.user,
            registry.len()
        );
        Self {
            cwd: home.clone(),
            home,
            user: config.user,
            welcome: config.welcome,
            history: VecDeque::new(),
            history_limit: config.history_limit,
            registry,
            fs,
        }
    }

    /// Greeting shown once at startup.
    pub fn welcome(&self) -> String {
        format!("{}\n", self.welcome)
    }

    /// Run one line of input and return the text to display.
    ///
    /// The line is recorded in history before anything else happens. Blank
    /// input yields an empty string. Any failure is reported as text:
    /// user-facing failures print their message, anything else prints
    /// `Error`.
    pub fn command(&mut self, text: &str) -> String {
        self.record(text);

        let args = tokenize(text);
        if args.is_empty() {
            return String::new();
        }

        match self.dispatch(&args) {
            Ok(out) => format_output(out),
            Err(e) if e.is_recognized() => format!("{e}\n"),
            Err(e) => {
                log::warn!("{}: {e}", args[0]);
                "Error\n".to_string()
            },
        }
    }

    fn dispatch(&mut self, args: &[&str]) -> Result<String> {
        let program = self.find_program(args[0])?;
        log::debug!("Dispatching {:?} as {program:?}", args[0]);
        program.run(args, self)
    }

    /// Resolve the program for the first token.
    ///
    /// Registered names win; the tree is only consulted for tokens that
    /// contain a `/`.
    fn find_program(&self, name: &str) -> Result<Program> {
        if let Some(program) = self.registry.get(name) {
            return Ok(program);
        }
        if !name.contains('/') {
            return Err(ShellError::CommandNotFound);
        }
        match self.locate(name)? {
            VirtualNode::Executable(program) => Ok(*program),
            VirtualNode::Directory(_) | VirtualNode::File(_) => {
                Err(ShellError::NotExecutable(name.to_string()))
            },
        }
    }

    fn record(&mut self, text: &str) {
        self.history.push_front(text.to_string());
        if let Some(limit) = self.history_limit {
            self.history.truncate(limit);
        }
    }

    /// Resolve typed path text against the current directory.
    pub fn resolve(&self, text: &str) -> PathSegments {
        path::resolve(text, &self.cwd, &self.home)
    }

    /// Resolve and look up typed path text.
    pub fn locate(&self, text: &str) -> Result<&Node> {
        self.fs.lookup(&self.resolve(text))
    }

    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    pub(crate) fn set_cwd(&mut self, path: PathSegments) {
        self.cwd = path;
    }

    pub fn home(&self) -> &[String] {
        &self.home
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Every line passed to [`ShellSession::command`], most recent first.
    pub fn history(&self) -> &VecDeque<String> {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn fs(&self) -> &FilesystemTree<Program> {
        &self.fs
    }
}

/// Build the startup tree: `/bin` with every registered command,
/// `/home/<user>/about.txt`, and an empty `/tmp`.
fn seed_tree(config: &ShellConfig, registry: &CommandRegistry) -> FilesystemTree<Program> {
    let bin = registry
        .iter()
        .fold(Directory::new(), |dir, (name, program)| {
            dir.with(name, VirtualNode::Executable(program))
        });
    let user_home = Directory::new().with("about.txt", VirtualNode::File(config.about.clone()));
    let home = Directory::new().with(config.user.clone(), user_home.into());

    FilesystemTree::new(
        Directory::new()
            .with("bin", bin.into())
            .with("home", home.into())
            .with("tmp", Directory::new().into()),
    )
}
