use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

mod command;
mod path;

use command::CommandCompleter;
use path::PathCompleter;

use crate::core::commands::BuiltinRegistry;
use crate::highlight::SyntaxHighlighter;

/// `rustyline` helper: completes the command word from the built-ins and
/// `PATH`, later words from the filesystem, and colours the input line.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
    builtins: BuiltinRegistry,
}

impl ShellCompleter {
    pub fn new(builtins: BuiltinRegistry, highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(&builtins),
            path_completer: PathCompleter::new(),
            highlighter,
            builtins,
        }
    }

    fn candidates(&self, line_up_to_cursor: &str, pos: usize) -> (usize, Vec<Pair>) {
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.is_empty() || line_up_to_cursor.ends_with(char::is_whitespace) {
            words.push("");
        }

        match words.as_slice() {
            [] | [""] => (pos, self.command_completer.complete_command("")),
            [word] => {
                let start = pos - word.len();
                (start, self.command_completer.complete_command(word))
            }
            [.., last] => {
                let start = pos - last.len();
                (start, self.path_completer.complete_path(last))
            }
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighter.is_enabled() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |word| self.builtins.is_builtin(word)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos], pos))
    }
}
