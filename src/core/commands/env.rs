use super::{Command, CommandContext, CommandError, IoContext};

#[derive(Clone, Default)]
pub struct EnvCommand;

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn summary(&self) -> &'static str {
        "print every environment variable as KEY=VALUE"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        for entry in ctx.env.entries() {
            writeln!(ctx.out, "{}", entry).io_context("env", "stdout")?;
        }
        Ok(())
    }
}
