use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::{Command, CommandContext, CommandError, IoContext};

#[derive(Clone, Default)]
pub struct TouchCommand;

impl TouchCommand {
    pub fn new() -> Self {
        Self
    }

    /// Creates `path` empty unless something already exists there. Existing
    /// files are never opened, so their contents stay as they were.
    pub fn touch(&self, path: &Path) -> std::io::Result<bool> {
        if path.try_exists()? {
            return Ok(false);
        }
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            // Lost a race with another creator: the file exists now.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn summary(&self) -> &'static str {
        "create an empty file if it does not exist yet"
    }

    fn execute(&self, args: &[String], _ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "touch: missing file operand".to_string(),
            ));
        }

        for name in args {
            let created = self
                .touch(Path::new(name))
                .io_context("touch", format!("cannot create or open {}", name))?;
            debug!(file = %name, created, "touch");
        }
        Ok(())
    }
}
