use super::{Command, CommandContext, CommandError, IoContext};

const USAGE: &str = "\
niluSH by Nilushanth Thiruchelvam
USAGE: [command] [option] [word]
or
USAGE: [command] [argument]

Built-in commands:
  ls [path]            list the entries of a directory (hidden entries are skipped)
  cd [path]            change the working directory (default: home) and print it
  pwd                  print the absolute working directory
  echo [-ns] [word..]  print the words; -ns joins them without spaces
  touch <file..>       create an empty file if it does not exist yet
  env                  print every environment variable as KEY=VALUE
  help                 print this text
  backup               show where a backup of the working directory would go

Any other command is run as an external program. Ctrl-D exits.";

#[derive(Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "print usage"
    }

    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        writeln!(ctx.out, "{}", USAGE).io_context("help", "stdout")
    }
}
