use std::collections::BTreeMap;
use std::io::Write;

use thiserror::Error;

mod backup;
mod cd;
mod echo;
mod env;
mod help;
mod ls;
mod pwd;
mod touch;

pub use backup::BackupCommand;
pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use env::EnvCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use pwd::PwdCommand;
pub use touch::TouchCommand;

use crate::core::env::EnvironmentView;
use crate::process::ProcessError;

/// Everything a single command invocation can fail with. Each variant
/// renders as one line naming the command and, where there is one, the path.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{command}: {path}: {reason}")]
    InvalidPath {
        command: &'static str,
        path: String,
        reason: String,
    },
    #[error("{command}: {reason}")]
    CommandNotFound { command: String, reason: &'static str },
    #[error("{command}: {target}: {source}")]
    IoFailure {
        command: &'static str,
        target: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{source}")]
    SpawnFailure {
        command: String,
        #[source]
        source: ProcessError,
    },
    #[error("{0}")]
    MalformedInput(String),
    #[error("{0}")]
    InvalidArguments(String),
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::CommandNotFound(command) => CommandError::CommandNotFound {
                command,
                reason: "command not found",
            },
            ProcessError::PermissionDenied(command) => CommandError::CommandNotFound {
                command,
                reason: "permission denied",
            },
            other => {
                let command = match &other {
                    ProcessError::Spawn { command, .. } | ProcessError::Wait { command, .. } => {
                        command.clone()
                    }
                    _ => String::from("nilush"),
                };
                CommandError::SpawnFailure {
                    command,
                    source: other,
                }
            }
        }
    }
}

/// Attaches the command name and target to a raw I/O error.
pub(crate) trait IoContext<T> {
    fn io_context(self, command: &'static str, target: impl Into<String>) -> Result<T, CommandError>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context(self, command: &'static str, target: impl Into<String>) -> Result<T, CommandError> {
        self.map_err(|source| CommandError::IoFailure {
            command,
            target: target.into(),
            source,
        })
    }
}

/// What a built-in gets to work with: where to print, and the environment.
pub struct CommandContext<'a> {
    pub out: &'a mut dyn Write,
    pub env: &'a EnvironmentView,
}

impl<'a> CommandContext<'a> {
    pub fn new(out: &'a mut dyn Write, env: &'a EnvironmentView) -> Self {
        Self { out, env }
    }
}

pub trait Command {
    fn name(&self) -> &'static str;
    fn summary(&self) -> &'static str;
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Ls(LsCommand),
    Cd(CdCommand),
    Pwd(PwdCommand),
    Echo(EchoCommand),
    Touch(TouchCommand),
    Env(EnvCommand),
    Help(HelpCommand),
    Backup(BackupCommand),
}

impl CommandType {
    fn inner(&self) -> &dyn Command {
        match self {
            CommandType::Ls(cmd) => cmd,
            CommandType::Cd(cmd) => cmd,
            CommandType::Pwd(cmd) => cmd,
            CommandType::Echo(cmd) => cmd,
            CommandType::Touch(cmd) => cmd,
            CommandType::Env(cmd) => cmd,
            CommandType::Help(cmd) => cmd,
            CommandType::Backup(cmd) => cmd,
        }
    }
}

/// The fixed set of built-ins, keyed by exact command word.
///
/// Built once at start-up and only read afterwards. Lookup is by full,
/// case-sensitive token equality, so `cdx` or `CD` never match `cd`.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
        };

        registry.register(CommandType::Ls(LsCommand::new()));
        registry.register(CommandType::Cd(CdCommand::new()));
        registry.register(CommandType::Pwd(PwdCommand::new()));
        registry.register(CommandType::Echo(EchoCommand::new()));
        registry.register(CommandType::Touch(TouchCommand::new()));
        registry.register(CommandType::Env(EnvCommand::new()));
        registry.register(CommandType::Help(HelpCommand::new()));
        registry.register(CommandType::Backup(BackupCommand::new()));

        registry
    }

    fn register(&mut self, command: CommandType) {
        self.commands.insert(command.inner().name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(CommandType::inner)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Runs the built-in called `name`, or returns `None` when there is no
    /// such built-in.
    pub fn execute(
        &self,
        name: &str,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Option<Result<(), CommandError>> {
        self.get(name).map(|cmd| cmd.execute(args, ctx))
    }
}
