//! Built-in commands for the webshell terminal.

use webshell_types::error::{Result, ShellError};
use webshell_vfs::VirtualNode;
use webshell_vfs::path::display;

use crate::interpreter::{Command, CommandRegistry};
use crate::session::ShellSession;

/// `strftime` layout used by `date`.
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(&CatCmd);
    reg.register(&CdCmd);
    reg.register(&DateCmd);
    reg.register(&EchoCmd);
    reg.register(&HelpCmd);
    reg.register(&LsCmd);
    reg.register(&PwdCmd);
    reg.register(&WhoamiCmd);
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Output the contents of a file"
    }
    fn execute(&self, args: &[&str], session: &mut ShellSession) -> Result<String> {
        let mut output = String::new();
        for arg in args.iter().skip(1) {
            match session.locate(arg)? {
                VirtualNode::File(text) => output.push_str(text),
                VirtualNode::Directory(_) => {
                    return Err(ShellError::IsADirectory(arg.to_string()));
                },
                VirtualNode::Executable(_) => {
                    return Err(ShellError::IsABinary(arg.to_string()));
                },
            }
        }
        Ok(output)
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory"
    }
    fn execute(&self, args: &[&str], session: &mut ShellSession) -> Result<String> {
        let Some(target) = args.get(1) else {
            let home = session.home().to_vec();
            session.set_cwd(home);
            return Ok(String::new());
        };
        // The resolved path is stored as-is once the node checks out.
        let path = session.resolve(target);
        match session.fs().lookup(&path)? {
            VirtualNode::Directory(_) => {},
            VirtualNode::File(_) | VirtualNode::Executable(_) => {
                return Err(ShellError::NotADirectory(target.to_string()));
            },
        }
        log::debug!("cd: {}", display(&path));
        session.set_cwd(path);
        Ok(String::new())
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Shows the current date"
    }
    fn execute(&self, _args: &[&str], _session: &mut ShellSession) -> Result<String> {
        Ok(chrono::Local::now().format(DATE_FORMAT).to_string())
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Outputs whatever is given to it"
    }
    fn execute(&self, args: &[&str], _session: &mut ShellSession) -> Result<String> {
        Ok(args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Display this help dialog"
    }
    fn execute(&self, _args: &[&str], session: &mut ShellSession) -> Result<String> {
        let reg = session.registry();
        let width = reg.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let lines: Vec<String> = reg
            .iter()
            .map(|(name, program)| format!("{name:<width$} - {}", program.description()))
            .collect();
        Ok(lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List a directory"
    }
    fn execute(&self, args: &[&str], session: &mut ShellSession) -> Result<String> {
        let target = args.get(1).copied();
        let path = match target {
            Some(text) => session.resolve(text),
            None => session.cwd().to_vec(),
        };
        match session.fs().lookup(&path)? {
            VirtualNode::Directory(dir) => Ok(dir.names().collect::<Vec<_>>().join("\n")),
            // Echoes the argument as typed rather than the resolved path.
            VirtualNode::File(_) | VirtualNode::Executable(_) => {
                Ok(target.unwrap_or_default().to_string())
            },
        }
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Display current directory"
    }
    fn execute(&self, _args: &[&str], session: &mut ShellSession) -> Result<String> {
        Ok(display(session.cwd()))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Shows your username"
    }
    fn execute(&self, _args: &[&str], session: &mut ShellSession) -> Result<String> {
        Ok(session.user().to_string())
    }
}
