//! Where the read-eval loop gets its lines from.
//!
//! [`EditorSource`] drives an interactive terminal through `rustyline`;
//! [`StreamSource`] reads any buffered byte stream, which is what the shell
//! uses when stdin is piped and what the tests use.

use std::io::{BufRead, Write};

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

mod completer;

pub use completer::ShellCompleter;

use crate::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The user abandoned the current line (Ctrl-C at the prompt).
    Interrupted,
    Eof,
}

pub trait LineSource {
    /// Shows `prompt` and blocks until a full line, an interrupt, or end of
    /// input. An `Err` means the input itself is broken and the session
    /// cannot continue.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;
}

pub struct EditorSource {
    editor: Editor<ShellCompleter, FileHistory>,
}

impl EditorSource {
    /// History is kept in memory for the session only.
    pub fn new(completer: ShellCompleter) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Line reader over a plain stream. Lines are split on `\n` only and decoded
/// lossily, so invalid UTF-8 or very long lines are never fatal.
pub struct StreamSource<R, W> {
    reader: R,
    prompt_out: W,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> StreamSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self {
            reader,
            prompt_out,
            buf: Vec::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.prompt_out)
    }
}

impl<R: BufRead, W: Write> LineSource for StreamSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => Ok(ReadOutcome::Eof),
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Ok(ReadOutcome::Line(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Err(ShellError::Input(e)),
        }
    }
}
