use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Command, CommandContext, CommandError, IoContext};

#[derive(Clone, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    /// Names in `dir` that do not start with `.`, in the order the
    /// directory stream yields them.
    pub fn visible_entries(&self, dir: &Path) -> std::io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name();
            if name.as_encoded_bytes().first() != Some(&b'.') {
                names.push(name);
            }
        }
        Ok(names)
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "list the entries of a directory (default: the working directory)"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        let target = match args.first() {
            Some(opt) if opt.starts_with('-') => {
                return Err(CommandError::InvalidArguments(format!(
                    "ls: unsupported option {}",
                    opt
                )));
            }
            Some(path) => path.as_str(),
            None => ".",
        };

        let names = self.visible_entries(Path::new(target)).map_err(|e| {
            debug!(path = target, error = %e, "ls failed");
            CommandError::InvalidPath {
                command: "ls",
                path: target.to_string(),
                reason: "invalid directory".to_string(),
            }
        })?;

        for name in names {
            writeln!(ctx.out, "{}", name.to_string_lossy()).io_context("ls", "stdout")?;
        }
        Ok(())
    }
}
