use super::{Command, CommandContext, CommandError, IoContext};

const NO_SPACE_FLAGS: [&str; 2] = ["-ns", "--no-space"];

#[derive(Clone, Default)]
pub struct EchoCommand;

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }

    /// The line `echo` prints, without the trailing newline. A leading
    /// `-ns`/`--no-space` joins the words with no separator.
    pub fn render(&self, args: &[String]) -> String {
        match args.split_first() {
            Some((flag, rest)) if NO_SPACE_FLAGS.contains(&flag.as_str()) => rest.concat(),
            _ => args.join(" "),
        }
    }
}

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn summary(&self) -> &'static str {
        "print the arguments; -ns joins them without spaces"
    }

    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        writeln!(ctx.out, "{}", self.render(args)).io_context("echo", "stdout")
    }
}
