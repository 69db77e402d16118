use super::{Command, CommandContext, CommandError, IoContext};

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn summary(&self) -> &'static str {
        "print the absolute working directory"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        let cwd = ctx.env.current_dir().io_context("pwd", "working directory")?;
        writeln!(ctx.out, "{}", cwd.display()).io_context("pwd", "stdout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{run_builtin, CwdGuard};

    #[test]
    fn test_pwd_prints_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let _cwd = CwdGuard::enter(dir.path());
        let (result, output) = run_builtin(&PwdCommand::new(), &[]);
        assert!(result.is_ok());
        let printed = std::path::PathBuf::from(output.trim_end());
        assert!(printed.is_absolute());
        assert_eq!(printed, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_pwd_ignores_arguments() {
        let _cwd = CwdGuard::new();
        let (result, output) = run_builtin(&PwdCommand::new(), &["extra"]);
        assert!(result.is_ok());
        assert_eq!(output.lines().count(), 1);
    }
}
