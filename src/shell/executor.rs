use std::io::Write;

use tracing::debug;

use crate::core::commands::{CommandContext, CommandError, IoContext};
use crate::core::tokenizer::tokenize;
use crate::process::ChildStatus;

const PIPE: &str = "|";

/// What running one input line amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line; nothing ran.
    Empty,
    Builtin,
    External { command: String, status: ChildStatus },
}

pub type ExecutionResult = Result<Outcome, CommandError>;

pub trait CommandHandler {
    /// Tokenizes `line` and runs it to completion: a built-in when the first
    /// word names one exactly, otherwise an external program in the
    /// foreground.
    fn execute_line(&mut self, line: &str) -> ExecutionResult;
}

impl<O: Write, E: Write> CommandHandler for super::Shell<O, E> {
    fn execute_line(&mut self, line: &str) -> ExecutionResult {
        let tokens = tokenize(line);
        let Some(command) = tokens.command() else {
            return Ok(Outcome::Empty);
        };

        if tokens.iter().any(|t| t == PIPE) {
            return Err(CommandError::MalformedInput(
                "nilush: pipelines are not supported".to_string(),
            ));
        }

        let args = tokens.args();
        let mut ctx = CommandContext::new(&mut self.out, &self.env);
        if let Some(result) = self.registry.execute(command, args, &mut ctx) {
            debug!(command, argc = args.len(), "ran builtin");
            result?;
            self.out.flush().io_context("nilush", "stdout")?;
            return Ok(Outcome::Builtin);
        }

        // Anything buffered must reach the terminal before the child writes.
        self.out.flush().io_context("nilush", "stdout")?;
        debug!(command, argc = args.len(), "launching external command");
        let status = self.launcher.launch(command, args, &self.env)?;
        Ok(Outcome::External {
            command: command.to_string(),
            status,
        })
    }
}
