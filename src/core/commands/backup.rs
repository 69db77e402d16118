use super::{Command, CommandContext, CommandError, IoContext};

pub const BACKUP_NAME: &str = "niluSH-backup";

/// Reports the backup target only; copying the directory is not implemented.
#[derive(Clone, Default)]
pub struct BackupCommand;

impl BackupCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for BackupCommand {
    fn name(&self) -> &'static str {
        "backup"
    }

    fn summary(&self) -> &'static str {
        "show where a backup of the working directory would go"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        let cwd = ctx.env.current_dir().io_context("backup", "working directory")?;
        writeln!(
            ctx.out,
            "Backup would be made in {} named \"{}\"",
            cwd.display(),
            BACKUP_NAME
        )
        .io_context("backup", "stdout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{run_builtin, CwdGuard};

    #[test]
    fn test_backup_reports_target() {
        let dir = tempfile::tempdir().unwrap();
        let _cwd = CwdGuard::enter(dir.path());
        let (result, output) = run_builtin(&BackupCommand::new(), &[]);
        assert!(result.is_ok());
        let cwd = dir.path().canonicalize().unwrap();
        assert_eq!(
            output,
            format!("Backup would be made in {} named \"niluSH-backup\"\n", cwd.display())
        );
        assert!(!cwd.join(BACKUP_NAME).exists());
    }
}
