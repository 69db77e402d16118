use std::env;

use tracing::debug;

use super::{Command, CommandContext, CommandError, IoContext};
use crate::path::PathExpander;

#[derive(Clone, Default)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

fn describe(err: &std::io::Error) -> &'static str {
    match err.kind() {
        std::io::ErrorKind::NotFound => "no such directory",
        std::io::ErrorKind::PermissionDenied => "permission denied",
        _ if err.raw_os_error() == Some(libc::ENOTDIR) => "not a directory",
        _ => "invalid path",
    }
}

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn summary(&self) -> &'static str {
        "change the working directory (default: home) and print it"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        let path_str = args.first().map(String::as_str).unwrap_or("~");
        let target = self
            .path_expander
            .expand(path_str)
            .ok_or_else(|| CommandError::InvalidPath {
                command: "cd",
                path: path_str.to_string(),
                reason: "home directory not found".to_string(),
            })?;

        // A failed chdir leaves the working directory where it was.
        env::set_current_dir(&target).map_err(|e| {
            debug!(path = %target.display(), error = %e, "cd failed");
            CommandError::InvalidPath {
                command: "cd",
                path: path_str.to_string(),
                reason: describe(&e).to_string(),
            }
        })?;

        let cwd = ctx.env.current_dir().io_context("cd", "working directory")?;
        writeln!(ctx.out, "{}", cwd.display()).io_context("cd", "stdout")
    }
}
